//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::MessageResponse;
use crate::core::AppState;
use crate::db::repository::{RepoError, employee};
use crate::utils::validation::{
    format_date, optional_field, parse_date, photo_too_large, require_field,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeNew, EmployeeUpdate};

/// GET /api/employees - all records, newest first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id} - single record
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    Ok(Json(employee))
}

/// POST /api/employees - create a record
///
/// Validation names every missing required field in one response rather
/// than failing on the first.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let mut missing = Vec::new();
    let name = require_field(payload.name.as_deref(), "name", &mut missing);
    let email = require_field(payload.email.as_deref(), "email", &mut missing);
    let position = require_field(payload.position.as_deref(), "position", &mut missing);
    let start_date = require_field(payload.start_date.as_deref(), "startDate", &mut missing);

    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Missing required fields: {} are required.",
            missing.join(", ")
        )));
    }

    let start_date = parse_date(&start_date)
        .map(format_date)
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeDateInvalid))?;

    let photo_url = optional_field(payload.photo_url.as_deref());
    if photo_too_large(photo_url.as_deref()) {
        return Err(AppError::new(ErrorCode::EmployeePhotoTooLarge));
    }

    let data = EmployeeNew {
        name,
        email,
        position,
        department: optional_field(payload.department.as_deref()),
        photo_url,
        start_date,
    };

    let employee = employee::create(&state.pool, data).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::EmployeeEmailExists,
            "This email address is already in use.",
        ),
        other => other.into(),
    })?;

    tracing::info!(id = %employee.id, email = %employee.email, "Employee created");

    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/employees/{id} - partial update
///
/// A field absent from the body is left unchanged; a present field
/// overwrites, even when empty. startDate is the exception: when present
/// it must parse as a calendar date.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(date) = payload.start_date.as_deref() {
        let parsed =
            parse_date(date).ok_or_else(|| AppError::new(ErrorCode::EmployeeDateInvalid))?;
        payload.start_date = Some(format_date(parsed));
    }

    if photo_too_large(payload.photo_url.as_deref()) {
        return Err(AppError::new(ErrorCode::EmployeePhotoTooLarge));
    }

    let employee = employee::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::EmployeeNotFound),
            RepoError::Duplicate(_) => AppError::with_message(
                ErrorCode::EmployeeEmailExists,
                "This email address is already in use by another employee.",
            ),
            other => other.into(),
        })?;

    tracing::info!(id = %employee.id, "Employee updated");

    Ok(Json(employee))
}

/// DELETE /api/employees/{id} - remove a record permanently
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    employee::delete(&state.pool, id).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::EmployeeNotFound),
        other => other.into(),
    })?;

    tracing::info!(id = %id, "Employee deleted");

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully",
    }))
}
