//! Auth feature reducer.
//!
//! Intent handlers for the authentication state machine. Validation is
//! synchronous and short-circuits before any store call; the store call
//! itself is returned as an effect for the runtime to spawn.

use consulta_core::accounts::AuthOutcome;
use consulta_core::validate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AuthField, AuthState, SubmitKind};
use crate::effects::UiEffect;

/// Message set by logout.
pub const MSG_LOGGED_OUT: &str = "Logged out successfully";

/// Sets the mode flag and clears the message. No validation.
///
/// Bumps the generation: a submit still in flight from the previous mode is
/// abandoned and its eventual outcome discarded.
pub fn set_mode(auth: &mut AuthState, register_mode: bool) {
    auth.message = None;
    if auth.register_mode != register_mode {
        auth.register_mode = register_mode;
        auth.generation += 1;
        auth.loading = false;
    }
    // Register-only fields cannot keep focus in login mode.
    if !register_mode
        && matches!(auth.focus, AuthField::FullName | AuthField::ConfirmPassword)
    {
        auth.focus = AuthField::Email;
    }
}

/// Replaces the value of a form field and clears the message. Pure, total.
pub fn edit_field(auth: &mut AuthState, field: AuthField, value: String) {
    *auth.field_mut(field) = value;
    auth.message = None;
}

/// Appends a character to the focused field and clears the message.
pub fn insert_char(auth: &mut AuthState, c: char) {
    auth.field_mut(auth.focus).push(c);
    auth.message = None;
}

/// Removes the last character of the focused field and clears the message.
pub fn backspace(auth: &mut AuthState) {
    auth.field_mut(auth.focus).pop();
    auth.message = None;
}

/// Submits the form, branching on the current mode.
///
/// On validation failure the message is set and no effect is returned:
/// validation never sets loading and never reaches the store. On success
/// the returned effect carries the new generation and the trimmed
/// credentials.
pub fn submit(auth: &mut AuthState) -> Vec<UiEffect> {
    if auth.register_mode {
        submit_register(auth)
    } else {
        submit_login(auth)
    }
}

fn submit_register(auth: &mut AuthState) -> Vec<UiEffect> {
    if let Some(message) = validate::validate_register(
        &auth.full_name,
        &auth.email,
        &auth.password,
        &auth.confirm_password,
    ) {
        auth.message = Some(message.to_string());
        return vec![];
    }

    auth.loading = true;
    auth.message = None;
    auth.generation += 1;
    vec![UiEffect::SpawnRegister {
        generation: auth.generation,
        full_name: auth.full_name.trim().to_string(),
        email: auth.email.trim().to_string(),
        password: auth.password.clone(),
    }]
}

fn submit_login(auth: &mut AuthState) -> Vec<UiEffect> {
    if let Some(message) = validate::validate_login(&auth.email, &auth.password) {
        auth.message = Some(message.to_string());
        return vec![];
    }

    auth.loading = true;
    auth.message = None;
    auth.generation += 1;
    vec![UiEffect::SpawnLogin {
        generation: auth.generation,
        email: auth.email.trim().to_string(),
        password: auth.password.clone(),
    }]
}

/// Ends the session.
///
/// Clears the credential secrets and the session, keeps full name and email
/// to ease re-login, and abandons any in-flight submit.
pub fn logout(auth: &mut AuthState) {
    auth.current_user = None;
    auth.password.clear();
    auth.confirm_password.clear();
    auth.message = Some(MSG_LOGGED_OUT.to_string());
    auth.loading = false;
    auth.generation += 1;
    auth.focus = AuthField::Email;
}

/// Merges a completed store call into state.
///
/// Outcomes whose generation no longer matches (submit superseded, mode
/// switched, logged out) are discarded wholesale.
pub fn apply_outcome(
    auth: &mut AuthState,
    generation: u64,
    kind: SubmitKind,
    outcome: AuthOutcome,
) {
    if generation != auth.generation {
        tracing::debug!(generation, current = auth.generation, "discarding stale auth outcome");
        return;
    }

    auth.loading = false;
    match outcome {
        AuthOutcome::Success(account) => {
            auth.message = Some(match kind {
                SubmitKind::Register => format!("Welcome, {}", account.full_name),
                SubmitKind::Login => format!("Welcome back, {}", account.full_name),
            });
            auth.current_user = Some(account);
        }
        AuthOutcome::Error(reason) => {
            auth.message = Some(reason);
        }
    }
}

/// Handles a key press on the auth screen.
pub fn handle_key(auth: &mut AuthState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter => {
            // Submission is disabled while a call is in flight; loading is
            // exposed in state precisely for this.
            if auth.loading {
                vec![]
            } else {
                submit(auth)
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            auth.focus = auth.focus.next(auth.register_mode);
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            auth.focus = auth.focus.prev(auth.register_mode);
            vec![]
        }
        KeyCode::Backspace => {
            backspace(auth);
            vec![]
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            set_mode(auth, !auth.register_mode);
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            insert_char(auth, c);
            vec![]
        }
        _ => vec![],
    }
}

/// Handles pasted text: appended to the focused field.
pub fn handle_paste(auth: &mut AuthState, text: &str) {
    auth.field_mut(auth.focus).push_str(text);
    auth.message = None;
}
