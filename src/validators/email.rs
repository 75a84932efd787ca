use std::sync::LazyLock;

use regex::Regex;

use super::ValidationError;

// RFC 5321 caps the forward path at 256 octets including angle brackets.
const MAX_EMAIL_LENGTH: usize = 254;

static LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+$").unwrap());

// Dotted labels with an alphabetic top-level domain of two or more chars.
static DOMAIN_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap());

/// Checks the address is a plausible `local@domain.tld`.
///
/// Intentionally stricter than the RFC grammar: no quoted local parts, no
/// address literals. The mailbox either receives the registration mail or
/// it does not; this only rejects obvious garbage.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::EmailInvalidFormat);
    };

    if !LOCAL_PART.is_match(local) || !DOMAIN_PART.is_match(domain) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    Ok(())
}
