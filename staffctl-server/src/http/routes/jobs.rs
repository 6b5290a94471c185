//! Employee job endpoints

use axum::{
    extract::State,
    routing::{get, patch},
    Router,
};

use crate::db::Database;
use crate::http::error::ApiError;
use crate::http::extractors::{EmployeeId, JobId, JsonBody};
use crate::http::response::JsonReply;
use crate::models::{EmployeeJob, JobAdded, JobPayload};

/// POST /employees/{employee_id}/jobs - add a job for an employee
///
/// Responds 200 rather than 201 to keep existing clients working.
async fn add_employee_job(
    State(db): State<Database>,
    EmployeeId(employee_id): EmployeeId,
    JsonBody(req): JsonBody<JobPayload>,
) -> Result<JsonReply<JobAdded>, ApiError> {
    let id = db
        .add_employee_job(employee_id, &req.department, &req.job_title)
        .await
        .map_err(ApiError::AddJobFailed)?;

    Ok(JsonReply(JobAdded::new(id)))
}

/// GET /employees/{employee_id}/jobs - list jobs for one employee
async fn list_jobs_for_employee(
    State(db): State<Database>,
    EmployeeId(employee_id): EmployeeId,
) -> Result<JsonReply<Vec<EmployeeJob>>, ApiError> {
    let jobs = db.get_employee_jobs_by_employee_id(employee_id).await?;
    Ok(JsonReply(jobs))
}

/// GET /employees/jobs - list every job
async fn list_employee_jobs(
    State(db): State<Database>,
) -> Result<JsonReply<Vec<EmployeeJob>>, ApiError> {
    let jobs = db.get_employee_jobs().await?;
    Ok(JsonReply(jobs))
}

/// PATCH /employees/jobs/{job_id} - set department and title
///
/// The body is the bare `true` result; an unknown id is not reported.
async fn update_employee_job(
    State(db): State<Database>,
    JobId(job_id): JobId,
    JsonBody(req): JsonBody<JobPayload>,
) -> Result<JsonReply<bool>, ApiError> {
    let updated = db
        .update_employee_job(job_id, &req.department, &req.job_title)
        .await?;

    Ok(JsonReply(updated))
}

/// Job routes
///
/// The static `jobs` segment wins over `{employee_id}`, so
/// `/employees/jobs/{job_id}` never reaches the per-employee routes.
pub fn router() -> Router<Database> {
    Router::new()
        .route("/employees/jobs", get(list_employee_jobs))
        .route("/employees/jobs/{job_id}", patch(update_employee_job))
        .route(
            "/employees/{employee_id}/jobs",
            get(list_jobs_for_employee).post(add_employee_job),
        )
}
