//! Provisioning
//!
//! Database seeding and administrative account management, driven by the
//! `directory-admin` binary. The server itself never seeds; a fresh
//! database stays empty until an operator runs `directory-admin seed`.

use sqlx::SqlitePool;

use crate::auth::hash_password;
use crate::db::repository::{admin, employee};
use crate::utils::{AppError, AppResult};
use shared::models::{AdminAccount, AdminCreate, EmployeeNew};

/// Password the seeded admin account starts with. Rotate it with
/// `directory-admin set-password` before exposing the server.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_NAME: &str = "Admin User";

/// Rows the seed actually inserted (existing rows are skipped)
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admins_created: usize,
    pub employees_created: usize,
}

/// Sample employee records for a fresh install
fn sample_employees() -> Vec<EmployeeNew> {
    let entry = |name: &str, email: &str, position: &str, department: &str, start: &str, photo: &str| {
        EmployeeNew {
            name: name.to_string(),
            email: email.to_string(),
            position: position.to_string(),
            department: Some(department.to_string()),
            photo_url: Some(photo.to_string()),
            start_date: start.to_string(),
        }
    };

    vec![
        entry(
            "John Doe",
            "john.doe@company.com",
            "Senior Software Engineer",
            "Engineering",
            "2022-01-15",
            "https://randomuser.me/api/portraits/men/1.jpg",
        ),
        entry(
            "Jane Smith",
            "jane.smith@company.com",
            "Product Manager",
            "Product",
            "2022-03-20",
            "https://randomuser.me/api/portraits/women/1.jpg",
        ),
        entry(
            "Mike Johnson",
            "mike.johnson@company.com",
            "UX Designer",
            "Design",
            "2022-06-10",
            "https://randomuser.me/api/portraits/men/2.jpg",
        ),
        entry(
            "Sarah Williams",
            "sarah.williams@company.com",
            "Marketing Specialist",
            "Marketing",
            "2022-08-05",
            "https://randomuser.me/api/portraits/women/2.jpg",
        ),
        entry(
            "David Brown",
            "david.brown@company.com",
            "DevOps Engineer",
            "Engineering",
            "2022-11-15",
            "https://randomuser.me/api/portraits/men/3.jpg",
        ),
    ]
}

/// Create an admin account with a freshly hashed password
pub async fn create_admin(pool: &SqlitePool, data: AdminCreate) -> AppResult<AdminAccount> {
    let password_hash = hash_password(&data.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;
    let account = admin::create(pool, &data.email, &password_hash, &data.name).await?;

    tracing::info!(email = %account.email, "Admin account created");

    Ok(account)
}

/// Reset an admin account password by email
pub async fn reset_password(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> AppResult<AdminAccount> {
    let password_hash = hash_password(password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;
    let account = admin::set_password(pool, email, &password_hash).await?;

    tracing::info!(email = %account.email, "Admin password updated");

    Ok(account)
}

/// Seed the default admin account and sample employees
///
/// Idempotent: rows whose email already exists are skipped, never
/// overwritten, so re-running against a live database is safe.
pub async fn seed(pool: &SqlitePool) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    if admin::find_by_email(pool, DEFAULT_ADMIN_EMAIL).await?.is_none() {
        let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;
        admin::create(pool, DEFAULT_ADMIN_EMAIL, &password_hash, DEFAULT_ADMIN_NAME).await?;
        report.admins_created += 1;

        tracing::warn!(
            email = DEFAULT_ADMIN_EMAIL,
            "Seeded default admin with the default password; rotate it before going live"
        );
    }

    for record in sample_employees() {
        if employee::find_by_email(pool, &record.email).await?.is_some() {
            continue;
        }
        employee::create(pool, record).await?;
        report.employees_created += 1;
    }

    tracing::info!(
        admins = report.admins_created,
        employees = report.employees_created,
        "Seed complete"
    );

    Ok(report)
}
