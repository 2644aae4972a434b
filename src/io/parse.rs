use serde::Deserialize;

use super::error::IoError;
use crate::domain::{Role, UserRecord};

/// Raw spreadsheet row as read from input.
///
/// Every column is optional: a missing cell becomes an empty string so the
/// validator can report it against its row.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUserRow {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl RawUserRow {
    /// Normalize this row into a user record
    pub fn parse(self) -> Result<UserRecord, IoError> {
        let role = match self.role.as_deref() {
            Some(role) => role.parse::<Role>()?,
            None => Role::default(),
        };

        Ok(UserRecord::normalized(
            self.username.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.phone.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
            role,
        ))
    }
}
