//! Admin Account Model

use serde::{Deserialize, Serialize};

/// Admin account entity
///
/// The email is stored normalized (trimmed, lowercased). The password hash
/// is never serialized onto the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminAccount {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Authenticated admin identity (without password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<&AdminAccount> for AdminInfo {
    fn from(account: &AdminAccount) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
        }
    }
}

/// Create admin account payload (provisioning only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub email: String,
    pub password: String,
    pub name: String,
}
