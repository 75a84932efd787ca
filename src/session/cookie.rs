//! Signed cookie helpers for session authentication.
//!
//! Uses HMAC-SHA256 to sign session IDs, making cookies tamper-proof. The
//! `Set-Cookie` values are built as plain header strings so the HTTP layer
//! needs no cookie-jar dependency.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::SessionConfig;
use crate::SecretString;

type HmacSha256 = Hmac<Sha256>;

/// Signs a session ID with HMAC-SHA256.
///
/// Returns a string in the format `{session_id}.{signature}`.
pub fn sign_session_id(session_id: &str, secret: &SecretString) -> String {
    let signature = compute_hmac(session_id.as_bytes(), secret.expose_secret().as_bytes());
    format!("{}.{}", session_id, hex::encode(signature))
}

/// Verifies a signed cookie value and extracts the session ID.
///
/// Returns `None` if the signature is invalid (tampered).
pub fn verify_signed_cookie(cookie_value: &str, secret: &SecretString) -> Option<String> {
    let (session_id, signature_hex) = cookie_value.rsplit_once('.')?;

    let actual_sig = hex::decode(signature_hex).ok()?;
    let expected_sig = compute_hmac(session_id.as_bytes(), secret.expose_secret().as_bytes());

    if constant_time_eq(&expected_sig, &actual_sig) {
        Some(session_id.to_owned())
    } else {
        log::warn!(target: "moodlog::session", "msg=\"session cookie tampered\" cookie_prefix=\"{}...\"", &cookie_value.chars().take(8).collect::<String>());
        None
    }
}

/// Builds a `Set-Cookie` header value issuing the session cookie.
///
/// Session cookies are always `HttpOnly` and `SameSite=Strict`; only the
/// `Secure` attribute varies, so local plain-HTTP development works.
pub fn build_session_cookie(signed_value: &str, config: &SessionConfig) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}; SameSite=Strict; HttpOnly",
        config.cookie_name,
        signed_value,
        config.cookie_path,
        config.session_lifetime.num_seconds(),
    );

    if config.cookie_secure {
        cookie.push_str("; Secure");
    }

    cookie
}

/// Builds a `Set-Cookie` header value that removes the session cookie:
/// empty value, zero max-age, and an expiry in the past.
pub fn build_removal_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; Path={}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        config.cookie_name, config.cookie_path,
    )
}

/// Extracts a cookie's raw value from a `Cookie` request header.
pub fn cookie_from_header<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Computes HMAC-SHA256.
///
/// # Panics
///
/// This function cannot panic as HMAC accepts keys of any size.
fn compute_hmac(message: &[u8], key: &[u8]) -> Vec<u8> {
    // SAFETY: HmacSha256::new_from_slice only fails if the key is invalid,
    // but HMAC-SHA256 accepts keys of any length, so this cannot fail.
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_secret() -> SecretString {
        SecretString::new("test-secret-key-that-is-long-enough")
    }

    #[test]
    fn test_sign_and_verify() {
        let secret = test_secret();
        let session_id = "abc123session";

        let signed = sign_session_id(session_id, &secret);
        let verified = verify_signed_cookie(&signed, &secret);

        assert_eq!(verified, Some(session_id.to_owned()));
    }

    #[test]
    fn test_tampered_signature() {
        let secret = test_secret();
        let session_id = "abc123session";

        let signed = sign_session_id(session_id, &secret);
        assert!(verify_signed_cookie(&signed, &secret).is_some());

        let tampered = format!("{}.{}", session_id, "0".repeat(64));
        assert!(verify_signed_cookie(&tampered, &secret).is_none());
    }

    #[test]
    fn test_tampered_session_id() {
        let secret = test_secret();
        let signed = sign_session_id("abc123session", &secret);

        // Replace session ID but keep signature
        let signature = signed.rsplit_once('.').unwrap().1;
        let tampered = format!("different_session.{signature}");

        assert!(verify_signed_cookie(&tampered, &secret).is_none());
    }

    #[test]
    fn test_wrong_secret() {
        let secret1 = SecretString::new("secret-key-one-that-is-long-enough");
        let secret2 = SecretString::new("secret-key-two-that-is-long-enough");

        let signed = sign_session_id("abc123session", &secret1);
        assert!(verify_signed_cookie(&signed, &secret2).is_none());
    }

    #[test]
    fn test_malformed_cookie() {
        let secret = test_secret();

        // No separator
        assert!(verify_signed_cookie("noseparator", &secret).is_none());

        // Invalid hex
        assert!(verify_signed_cookie("session.notahexsignature", &secret).is_none());
    }

    #[test]
    fn test_build_session_cookie() {
        let config = SessionConfig {
            secret_key: test_secret(),
            ..Default::default()
        };
        let cookie = build_session_cookie("abc.def", &config);

        assert!(cookie.starts_with("moodlog_session=abc.def; Path=/"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_build_removal_cookie() {
        let config = SessionConfig::default();
        let cookie = build_removal_cookie(&config);

        assert!(cookie.starts_with("moodlog_session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
    }

    #[test]
    fn test_cookie_from_header() {
        let header = "other=1; moodlog_session=abc.def; theme=dark";
        assert_eq!(cookie_from_header(header, "moodlog_session"), Some("abc.def"));
        assert_eq!(cookie_from_header(header, "theme"), Some("dark"));
        assert_eq!(cookie_from_header(header, "missing"), None);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hello!"));
        assert!(!constant_time_eq(b"", b"x"));
        assert!(constant_time_eq(b"", b""));
    }
}
