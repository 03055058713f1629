use crate::errors::CoreError;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_SUPPORT_MESSAGE_LEN: usize = 10;

/// Reject a blank required field with `"<label> is required"`.
pub fn require_non_empty(label: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(format!("{label} is required")));
    }
    Ok(())
}

/// Required e-mail with a plausible shape: `local@domain.tld`, no whitespace,
/// a single `@`.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    require_non_empty("Email", email)?;
    if !is_email_shaped(email) {
        return Err(CoreError::ValidationError(
            "Please enter a valid email address".into(),
        ));
    }
    Ok(())
}

pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_password(password: &str, retype: &str) -> Result<(), CoreError> {
    require_non_empty("Password", password)?;
    if password != retype {
        return Err(CoreError::ValidationError("Passwords do not match".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::ValidationError(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}
