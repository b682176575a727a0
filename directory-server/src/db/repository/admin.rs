//! Admin Account Repository
//!
//! Emails are normalized (trimmed, lowercased) before every lookup and
//! insert, so the stored column only ever holds the canonical form.

use super::{RepoError, RepoResult};
use shared::models::AdminAccount;
use shared::util;
use sqlx::SqlitePool;

const ADMIN_SELECT: &str =
    "SELECT id, email, password_hash, name, created_at, updated_at FROM admin_account";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<AdminAccount>> {
    let sql = format!("{ADMIN_SELECT} ORDER BY created_at");
    let rows = sqlx::query_as::<_, AdminAccount>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AdminAccount>> {
    let sql = format!("{ADMIN_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, AdminAccount>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<AdminAccount>> {
    let email = util::normalize_email(email);
    let sql = format!("{ADMIN_SELECT} WHERE email = ? LIMIT 1");
    let row = sqlx::query_as::<_, AdminAccount>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    name: &str,
) -> RepoResult<AdminAccount> {
    let now = util::now_millis();
    let id = util::snowflake_id();
    let email = util::normalize_email(email);
    sqlx::query(
        "INSERT INTO admin_account (id, email, password_hash, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(&email)
    .bind(password_hash)
    .bind(name)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create admin account".into()))
}

pub async fn set_password(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> RepoResult<AdminAccount> {
    let now = util::now_millis();
    let email = util::normalize_email(email);
    let rows = sqlx::query("UPDATE admin_account SET password_hash = ?1, updated_at = ?2 WHERE email = ?3")
        .bind(password_hash)
        .bind(now)
        .bind(&email)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Admin account {email} not found")));
    }
    find_by_email(pool, &email)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Admin account {email} not found")))
}
