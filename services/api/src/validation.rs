//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Shortest password accepted when an admin changes credentials
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password accepted; argon2 input is bounded to keep hashing cheap
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Shortest contact message accepted from the public form
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// True when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with `message` if any of `values` is blank
pub fn require_all(values: &[&str], message: &str) -> Result<(), String> {
    if values.iter().any(|value| is_blank(value)) {
        return Err(message.to_string());
    }

    Ok(())
}

/// Map a blank optional field to `None` and trim the rest
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > 254 {
        return Err("Invalid email address".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email address".to_string());
    }

    Ok(())
}

/// Validate a contact form message body
pub fn validate_message(message: &str) -> Result<(), String> {
    if message.trim().chars().count() < MIN_MESSAGE_LENGTH {
        return Err(format!(
            "Message must be at least {} characters",
            MIN_MESSAGE_LENGTH
        ));
    }

    Ok(())
}

/// Validate a new admin password
pub fn validate_password(password: &str) -> Result<(), String> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        ));
    }

    Ok(())
}
