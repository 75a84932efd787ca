//! Input validation for registration fields.

pub mod email;
pub mod password;

pub use email::validate_email;
pub use password::validate_password;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    EmailEmpty,
    EmailTooLong,
    EmailInvalidFormat,
    PasswordTooShort,
    PasswordTooLong,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmailEmpty => write!(f, "Email cannot be empty"),
            ValidationError::EmailTooLong => write!(f, "Email is too long (max 254 characters)"),
            ValidationError::EmailInvalidFormat => write!(f, "Invalid email format"),
            ValidationError::PasswordTooShort => {
                write!(f, "Password is too short (min 8 characters)")
            }
            ValidationError::PasswordTooLong => {
                write!(f, "Password is too long (max 128 characters)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
