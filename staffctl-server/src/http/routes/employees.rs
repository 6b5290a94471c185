//! Employee endpoints

use axum::{extract::State, routing::get, Router};

use crate::db::Database;
use crate::http::error::ApiError;
use crate::http::response::JsonReply;
use crate::models::Employee;

/// GET /employees - list all employees
async fn list_employees(State(db): State<Database>) -> Result<JsonReply<Vec<Employee>>, ApiError> {
    let employees = db.get_employees().await?;
    Ok(JsonReply(employees))
}

/// Employee routes
pub fn router() -> Router<Database> {
    Router::new().route("/employees", get(list_employees))
}
