use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Which kind of record a batch carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Media,
    User,
}

/// A single unit of client input that the engine partitions and dispatches
///
/// Records are immutable once built; the engine moves them into chunks and
/// hands each chunk to the submitter exactly once.
pub trait Record: Send + Sync + 'static {
    const KIND: RecordKind;

    /// Identifier used when the remote side reports this record back
    fn identifier(&self) -> &str;

    /// Size of the payload sent for this record
    fn byte_len(&self) -> u64;
}

/// Binary payload destined for a remote folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub filename: String,
    pub payload: Vec<u8>,
}

impl MediaRecord {
    pub fn new(filename: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            payload,
        }
    }
}

impl Record for MediaRecord {
    const KIND: RecordKind = RecordKind::Media;

    fn identifier(&self) -> &str {
        &self.filename
    }

    fn byte_len(&self) -> u64 {
        self.payload.len() as u64
    }
}

/// Account role assigned to an imported user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// User account parsed from a spreadsheet row
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl UserRecord {
    /// Build a record from raw cell values, normalizing them the way the
    /// import form does: every field trimmed, email lower-cased.
    pub fn normalized(
        username: &str,
        email: &str,
        phone: &str,
        password: &str,
        role: Role,
    ) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            password: password.trim().to_string(),
            role,
        }
    }
}

// Keep passwords out of logs
impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl Record for UserRecord {
    const KIND: RecordKind = RecordKind::User;

    fn identifier(&self) -> &str {
        &self.username
    }

    fn byte_len(&self) -> u64 {
        (self.username.len() + self.email.len() + self.phone.len() + self.password.len()) as u64
    }
}
