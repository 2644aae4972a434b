use once_cell::sync::Lazy;
use regex::Regex;

use super::error::Violation;
use crate::domain::{MediaRecord, UserRecord};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 8;

/// local@domain.tld, no whitespace and a single @
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Check one record, tagging violations with its 1-based `row`
pub fn validate_user(user: &UserRecord, row: usize) -> Vec<Violation> {
    let mut violations = Vec::new();

    let username_len = user.username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&username_len) {
        violations.push(Violation::UsernameLength { row });
    }

    if !EMAIL_PATTERN.is_match(&user.email) {
        violations.push(Violation::InvalidEmail { row });
    }

    if user.password.chars().count() < PASSWORD_MIN {
        violations.push(Violation::PasswordTooShort { row });
    }

    if user.phone.is_empty() {
        violations.push(Violation::MissingPhone { row });
    }

    violations
}

/// Check every record independently and return the complete violation list.
///
/// An empty list means the batch may be dispatched; anything else must stop
/// the run before a single chunk goes out.
pub fn validate_users(users: &[UserRecord]) -> Vec<Violation> {
    users
        .iter()
        .enumerate()
        .flat_map(|(index, user)| validate_user(user, index + 1))
        .collect()
}

/// Pre-dispatch gate for a batch of records
pub trait BatchValidation: Sized {
    /// Every violation in the batch; empty when it may be dispatched
    fn validate_batch(records: &[Self]) -> Vec<Violation>;
}

impl BatchValidation for UserRecord {
    fn validate_batch(records: &[Self]) -> Vec<Violation> {
        validate_users(records)
    }
}

// File-type filtering happens before records reach the engine
impl BatchValidation for MediaRecord {
    fn validate_batch(_records: &[Self]) -> Vec<Violation> {
        Vec::new()
    }
}
