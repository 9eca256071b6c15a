use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::accounts::models::{AccountSummary, Credentials, LoginSession};
use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::extract::json_or_default;
use crate::state::AppState;

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<AccountSummary>>), AppError> {
    let creds: Credentials = json_or_default(&headers, &body)?;
    let account = state.accounts.register(
        creds.username.as_deref().unwrap_or_default(),
        creds.password.as_deref().unwrap_or_default(),
    )?;
    Ok((StatusCode::CREATED, Json(Envelope::data(account))))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Envelope<LoginSession>>, AppError> {
    let creds: Credentials = json_or_default(&headers, &body)?;
    let session = state.accounts.login(
        creds.username.as_deref().unwrap_or_default(),
        creds.password.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(Envelope::data(session)))
}

/// GET /api/users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<AccountSummary>>> {
    Json(Envelope::list(state.accounts.list()))
}
