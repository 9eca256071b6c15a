use axum::{
    extract::{Path, State},
    Json,
};

use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::jobs::models::Job;
use crate::state::AppState;

pub const NO_JOB_FOUND: &str = "No job found.";
pub const NO_JOBS_IN_LOCATION: &str = "No jobs found in this location";

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Envelope<Vec<Job>>> {
    Json(Envelope::list(state.jobs.all().to_vec()))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Job>>, AppError> {
    let job = state
        .jobs
        .find_by_raw_id(&id)
        .ok_or_else(|| AppError::NotFound(NO_JOB_FOUND.to_string()))?;
    Ok(Json(Envelope::data(job.clone())))
}

/// GET /api/jobs/location/:city
pub async fn handle_jobs_by_location(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Envelope<Vec<Job>>>, AppError> {
    let matches: Vec<Job> = state.jobs.by_location(&city).into_iter().cloned().collect();
    if matches.is_empty() {
        return Err(AppError::NotFound(NO_JOBS_IN_LOCATION.to_string()));
    }
    Ok(Json(Envelope::list(matches)))
}
