use axum::{body::Bytes, http::HeaderMap, Json};

use crate::applications::intake::{submit_application, APPLICATION_ACCEPTED};
use crate::applications::models::{Application, ApplicationRequest};
use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::extract::json_or_default;

/// POST /api/apply
pub async fn handle_apply(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Envelope<Application>>, AppError> {
    let req: ApplicationRequest = json_or_default(&headers, &body)?;
    let application = submit_application(req)?;
    Ok(Json(
        Envelope::data(application).with_message(APPLICATION_ACCEPTED),
    ))
}
