pub mod error;
pub mod rules;

// Re-export commonly used types
pub use error::Violation;
pub use rules::{BatchValidation, validate_user, validate_users};
