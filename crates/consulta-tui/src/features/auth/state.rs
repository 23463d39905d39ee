//! Authentication state.
//!
//! The single snapshot the auth screen renders and the reducer mutates.

use consulta_core::accounts::Account;

/// Fields on the auth form.
///
/// Full name and confirm password exist only in register mode; focus
/// navigation skips them in login mode and their values are ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    FullName,
    #[default]
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    /// Field label shown on the form.
    pub fn label(self) -> &'static str {
        match self {
            AuthField::FullName => "Full name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm password",
        }
    }

    /// Whether the field's value is masked on screen.
    pub fn is_secret(self) -> bool {
        matches!(self, AuthField::Password | AuthField::ConfirmPassword)
    }

    /// The next field in focus order for the given mode.
    pub fn next(self, register_mode: bool) -> Self {
        if register_mode {
            match self {
                AuthField::FullName => AuthField::Email,
                AuthField::Email => AuthField::Password,
                AuthField::Password => AuthField::ConfirmPassword,
                AuthField::ConfirmPassword => AuthField::FullName,
            }
        } else {
            match self {
                AuthField::Email => AuthField::Password,
                _ => AuthField::Email,
            }
        }
    }

    /// The previous field in focus order for the given mode.
    pub fn prev(self, register_mode: bool) -> Self {
        if register_mode {
            match self {
                AuthField::FullName => AuthField::ConfirmPassword,
                AuthField::Email => AuthField::FullName,
                AuthField::Password => AuthField::Email,
                AuthField::ConfirmPassword => AuthField::Password,
            }
        } else {
            match self {
                AuthField::Email => AuthField::Password,
                _ => AuthField::Email,
            }
        }
    }
}

/// Which store call a submit kicked off.
///
/// Determines the welcome message once the outcome arrives; the mode flag
/// cannot be trusted for that because it may have been toggled while the
/// call was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Register,
    Login,
}

/// Authentication state.
///
/// Invariants: `current_user.is_some()` means the home screen is shown;
/// `loading` is mutually exclusive with a terminal message from the same
/// submit attempt.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// Register mode vs login mode.
    pub register_mode: bool,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// The authenticated account, if any.
    pub current_user: Option<Account>,
    /// Advisory or error message; cleared on most edits.
    pub message: Option<String>,
    /// True while a register/login call is in flight. Exposed so the UI can
    /// disable repeat submission.
    pub loading: bool,
    /// The focused form field.
    pub focus: AuthField,
    /// Submit generation counter. Bumped by submit, mode toggle, and
    /// logout; outcomes tagged with a stale generation are discarded.
    pub generation: u64,
}

impl AuthState {
    /// Creates the session-start auth state: login mode, everything empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a form field.
    pub fn field(&self, field: AuthField) -> &str {
        match field {
            AuthField::FullName => &self.full_name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Returns a mutable reference to a form field.
    pub fn field_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::FullName => &mut self.full_name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Fields shown on the form in the current mode, in focus order.
    pub fn visible_fields(&self) -> &'static [AuthField] {
        if self.register_mode {
            &[
                AuthField::FullName,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ]
        } else {
            &[AuthField::Email, AuthField::Password]
        }
    }
}
