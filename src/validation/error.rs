use thiserror::Error;

/// A single constraint violation, tagged with the 1-based row it came from
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Row {row}: Username must be between 3 and 50 characters")]
    UsernameLength { row: usize },

    #[error("Row {row}: Invalid email format")]
    InvalidEmail { row: usize },

    #[error("Row {row}: Password must be at least 8 characters long")]
    PasswordTooShort { row: usize },

    #[error("Row {row}: Phone number is required")]
    MissingPhone { row: usize },
}

impl Violation {
    /// 1-based position of the offending record
    pub fn row(&self) -> usize {
        match self {
            Self::UsernameLength { row }
            | Self::InvalidEmail { row }
            | Self::PasswordTooShort { row }
            | Self::MissingPhone { row } => *row,
        }
    }
}
