//! Employee job repository
//!
//! - add: INSERT inside a transaction, returns the store-assigned id
//! - update: UPDATE inside a transaction, zero matched rows still succeeds
//! - list / list by employee: plain scans, no pagination

use super::{Database, DbError};
use crate::models::EmployeeJob;

impl Database {
    /// Insert a job for an employee and return its new id.
    ///
    /// The employee reference is not checked here.
    pub async fn add_employee_job(
        &self,
        employee_id: i64,
        department: &str,
        job_title: &str,
    ) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO employeejobs (employee_id, department, job_title) VALUES (?, ?, ?)",
        )
        .bind(employee_id)
        .bind(department)
        .bind(job_title)
        .execute(&mut *tx)
        .await;

        let done = match inserted {
            Ok(done) => done,
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback after failed insert failed");
                }
                return Err(err.into());
            }
        };

        tx.commit().await?;

        let id = done.last_insert_rowid();
        tracing::debug!(job_id = id, employee_id, "employee job added");
        Ok(id)
    }

    /// Set department and job title on a job.
    ///
    /// Returns `true` once committed, whether or not a row matched.
    pub async fn update_employee_job(
        &self,
        job_id: i64,
        department: &str,
        job_title: &str,
    ) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let done = sqlx::query("UPDATE employeejobs SET department = ?, job_title = ? WHERE id = ?")
            .bind(department)
            .bind(job_title)
            .bind(job_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(job_id, rows = done.rows_affected(), "employee job updated");
        Ok(true)
    }

    /// List every job assignment.
    pub async fn get_employee_jobs(&self) -> Result<Vec<EmployeeJob>, DbError> {
        let jobs = sqlx::query_as::<_, EmployeeJob>(
            "SELECT id, employee_id, department, job_title FROM employeejobs",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// List the jobs held by one employee. No match yields an empty vector.
    pub async fn get_employee_jobs_by_employee_id(
        &self,
        employee_id: i64,
    ) -> Result<Vec<EmployeeJob>, DbError> {
        let jobs = sqlx::query_as::<_, EmployeeJob>(
            "SELECT id, employee_id, department, job_title FROM employeejobs WHERE employee_id = ?",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }
}
