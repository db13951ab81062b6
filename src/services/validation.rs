use uuid::Uuid;

use crate::common::ValidationError;
use crate::models::{SupportForm, SupportTicket, TicketCategory};
use crate::routing::AuthMode;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 2000;
pub const MAX_ROBOT_NAME_LEN: usize = 100;

/// Email validation
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }

    // Domain must have at least one dot, not at either end
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Checks the auth form before anything is sent to the backend.
///
/// Password length and confirmation only apply to sign-up; existing accounts
/// may predate the length rule.
pub fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required("email"));
    }
    if password.is_empty() {
        return Err(ValidationError::Required("password"));
    }
    if !validate_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if mode == AuthMode::SignUp {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if password != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
    }

    Ok(())
}

fn required(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_string())
}

/// Turns raw contact-form input into a ticket ready to submit.
pub fn validate_support_form(
    form: &SupportForm,
    user_id: Option<Uuid>,
) -> Result<SupportTicket, ValidationError> {
    let name = required(&form.name, "name", MAX_NAME_LEN)?;
    let email = required(&form.email, "email", MAX_EMAIL_LEN)?;
    if !validate_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    let subject = required(&form.subject, "subject", MAX_SUBJECT_LEN)?;
    let category = form.category.parse::<TicketCategory>().map_err(|_| {
        ValidationError::UnknownChoice {
            field: "category",
            value: form.category.clone(),
        }
    })?;
    let message = required(&form.message, "message", MAX_MESSAGE_LEN)?;

    Ok(SupportTicket {
        user_id,
        name,
        email,
        subject,
        category,
        message,
    })
}

pub fn validate_robot_name(name: &str) -> Result<String, ValidationError> {
    required(name, "name", MAX_ROBOT_NAME_LEN)
}
