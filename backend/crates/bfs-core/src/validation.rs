//! Input validation shared by the API and the HTML forms.

use crate::{CoreError, CoreResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_PHONE_LENGTH: usize = 32;
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Trim and lower-case an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Shape check only: one `@`, non-empty local part, dotted domain
#[track_caller]
pub fn validate_email(email: &str) -> CoreResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CoreError::validation("email", "Email is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::validation("email", "Email is too long"));
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
                && domain
                    .split('.')
                    .filter(|label| !label.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CoreError::validation("email", "Email address is not valid"))
    }
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreResult<()> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            "password",
            format!("Password must be at most {MAX_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_name(name: &str) -> CoreResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::validation("name", "Name is required"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::validation(
            "name",
            format!("Name must be at most {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_phone(phone: &str) -> CoreResult<()> {
    let phone = phone.trim();
    if phone.len() > MAX_PHONE_LENGTH {
        return Err(CoreError::validation("phone", "Phone number is too long"));
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    if !allowed || digits < 7 {
        return Err(CoreError::validation(
            "phone",
            "Phone number is not valid",
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_message(message: &str) -> CoreResult<()> {
    let message = message.trim();
    if message.is_empty() {
        return Err(CoreError::validation("message", "Message is required"));
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::validation(
            "message",
            format!("Message must be at most {MAX_MESSAGE_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Finite and strictly greater than zero
#[track_caller]
pub fn require_positive(field: &'static str, value: f64) -> CoreResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CoreError::validation(
            field,
            format!("{} must be a positive number", display_name(field)),
        ))
    }
}

/// Finite and zero or greater
#[track_caller]
pub fn require_non_negative(field: &'static str, value: f64) -> CoreResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CoreError::validation(
            field,
            format!("{} must be zero or a positive number", display_name(field)),
        ))
    }
}

/// `annual_rate` -> `Annual rate`
fn display_name(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
