//! Employee Record Model

use serde::{Deserialize, Serialize};

/// Employee directory entry
///
/// `start_date` is a canonical `YYYY-MM-DD` calendar date. Timestamps are
/// Unix milliseconds. Wire field names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: Option<String>,
    pub photo_url: Option<String>,
    pub start_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload
///
/// Every field is optional at the wire level so validation can name all
/// missing required fields in one response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub photo_url: Option<String>,
    pub start_date: Option<String>,
}

/// Validated employee fields, ready for insert
///
/// Produced by the validation layer from [`EmployeeCreate`]; `start_date`
/// is already canonical.
#[derive(Debug, Clone)]
pub struct EmployeeNew {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: Option<String>,
    pub photo_url: Option<String>,
    pub start_date: String,
}

/// Update employee payload
///
/// A field absent from the payload leaves the stored value unchanged; a
/// present field overwrites, including with an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub photo_url: Option<String>,
    pub start_date: Option<String>,
}
