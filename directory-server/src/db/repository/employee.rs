//! Employee Repository
//!
//! The employee email column carries a case-insensitive unique index; the
//! database, not this module, is the authority on duplicates. A racing
//! insert surfaces as [`RepoError::Duplicate`] via the sqlx conversion.

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeNew, EmployeeUpdate};
use shared::util;
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT id, name, email, position, department, photo_url, start_date, created_at, updated_at FROM employee";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Employee>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Case-insensitive lookup (the column collation does the folding).
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE email = ? LIMIT 1");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(email.trim())
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: EmployeeNew) -> RepoResult<Employee> {
    let now = util::now_millis();
    let id = util::snowflake_id();
    sqlx::query(
        "INSERT INTO employee (id, name, email, position, department, photo_url, start_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.position)
    .bind(&data.department)
    .bind(&data.photo_url)
    .bind(&data.start_date)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let now = util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET name = COALESCE(?1, name), email = COALESCE(?2, email), position = COALESCE(?3, position), department = COALESCE(?4, department), photo_url = COALESCE(?5, photo_url), start_date = COALESCE(?6, start_date), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.position)
    .bind(&data.department)
    .bind(&data.photo_url)
    .bind(&data.start_date)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}
