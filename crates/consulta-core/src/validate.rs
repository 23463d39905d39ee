//! Credential validation rules.
//!
//! Shared by the auth screen reducer and the headless CLI so both paths
//! agree on what a valid submission is. Checks run in a fixed order and
//! short-circuit on the first failure; no partial validation state is ever
//! shown to the user.

/// Error shown when a required field is blank.
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill all fields";

/// Error shown when the password is shorter than [`PASSWORD_MIN_LEN`].
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Error shown when password and confirmation differ.
pub const MSG_PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Validates a registration submission.
///
/// Returns the first failing message, or None when the input is valid.
/// Field presence is judged after trimming; the password/confirmation
/// comparison is exact (untrimmed).
pub fn validate_register(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Option<&'static str> {
    let blank = [full_name, email, password, confirm_password]
        .iter()
        .any(|field| field.trim().is_empty());
    if blank {
        return Some(MSG_FILL_ALL_FIELDS);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Some(MSG_PASSWORD_TOO_SHORT);
    }
    if password != confirm_password {
        return Some(MSG_PASSWORDS_DO_NOT_MATCH);
    }
    None
}

/// Validates a login submission.
///
/// Returns the first failing message, or None when the input is valid.
pub fn validate_login(email: &str, password: &str) -> Option<&'static str> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Some(MSG_FILL_ALL_FIELDS);
    }
    None
}
