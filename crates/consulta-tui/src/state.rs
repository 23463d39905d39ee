//! Application state composition.
//!
//! ```text
//! AppState
//! ├── should_quit: bool
//! ├── auth: AuthState       (auth form fields, session status, loading)
//! └── catalog: CatalogState (search, filter, slot selection, bookings)
//! ```
//!
//! The reducer in `update.rs` is the single owner of this state: every
//! intent mutates it there and nowhere else, and the runtime re-renders
//! from the resulting snapshot. Which screen is shown follows from
//! `auth.current_user`: `None` renders the auth form, `Some` the home
//! screen.

use crate::features::auth::AuthState;
use crate::features::catalog::CatalogState;

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Authentication state (form fields, session status).
    pub auth: AuthState,
    /// Home screen state (catalog browsing and bookings).
    pub catalog: CatalogState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the session-start state: anonymous, empty form, full catalog.
    pub fn new() -> Self {
        Self {
            should_quit: false,
            auth: AuthState::new(),
            catalog: CatalogState::new(),
        }
    }
}
