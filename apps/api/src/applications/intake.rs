use serde_json::Value;
use tracing::info;

use crate::applications::models::{Application, ApplicationRequest};
use crate::errors::AppError;

pub const MISSING_FIELDS: &str = "Missing required fields: jobId, name, email";
pub const APPLICATION_ACCEPTED: &str = "Application submitted successfully";

/// A field is present unless it is absent, `null`, `false`, zero or an empty string.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validates a submission and acknowledges it.
///
/// The job id is not checked against the job store, and the email is not
/// checked for format; any present value is accepted and echoed back.
pub fn submit_application(req: ApplicationRequest) -> Result<Application, AppError> {
    let present = |field: Option<Value>| field.filter(is_present);

    let (Some(job_id), Some(name), Some(email)) =
        (present(req.job_id), present(req.name), present(req.email))
    else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    info!(%job_id, %name, %email, "Application received");

    Ok(Application {
        job_id,
        name,
        email,
    })
}
