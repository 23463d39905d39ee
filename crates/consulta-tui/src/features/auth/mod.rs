//! Auth feature slice: the authentication state machine.
//!
//! `state.rs` holds the single AuthState snapshot, `update.rs` the intent
//! handlers (mode toggle, field edits, submit, logout, outcome
//! application), `render.rs` the form view.

pub mod render;
pub mod state;
pub mod update;

pub use state::{AuthField, AuthState, SubmitKind};
