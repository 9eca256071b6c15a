use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw submission as sent by the client. Fields keep whatever JSON the
/// client sent so absence or emptiness is judged by intake validation,
/// not by the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_id: Option<Value>,
    pub name: Option<Value>,
    pub email: Option<Value>,
}

/// An accepted submission, echoed back to the caller unchanged.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub job_id: Value,
    pub name: Value,
    pub email: Value,
}
