//! Shared fixtures: a file-backed database with the expected tables.

use std::path::{Path, PathBuf};

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

pub const SCHEMA: &str = r#"
    CREATE TABLE employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        gender TEXT NOT NULL
    );
    CREATE TABLE employeejobs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL,
        department TEXT NOT NULL,
        job_title TEXT NOT NULL
    );
"#;

/// Create `employees.db` under `dir` with the schema and the given employees.
pub async fn seeded_file(dir: &Path, genders: &[&str]) -> PathBuf {
    let path = dir.join("employees.db");

    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("create database file");

    sqlx::raw_sql(SCHEMA)
        .execute(&mut conn)
        .await
        .expect("create schema");

    for gender in genders {
        sqlx::query("INSERT INTO employees (gender) VALUES (?)")
            .bind(*gender)
            .execute(&mut conn)
            .await
            .expect("seed employee");
    }

    conn.close().await.expect("close seeding connection");
    path
}
