//! Employee reads. Employees are seeded externally and never written here.

use super::{Database, DbError};
use crate::models::Employee;

impl Database {
    /// List every employee. Empty table yields an empty vector.
    pub async fn get_employees(&self) -> Result<Vec<Employee>, DbError> {
        let employees = sqlx::query_as::<_, Employee>("SELECT id, gender FROM employees")
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }
}
