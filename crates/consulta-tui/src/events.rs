//! UI event types.
//!
//! Everything the reducer can react to: terminal input and completed async
//! work arriving through the runtime's inbox.

use consulta_core::accounts::AuthOutcome;

use crate::features::auth::SubmitKind;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (idle poll elapsed with no input).
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// Auth async results.
    Auth(AuthUiEvent),
}

/// Async results from the account store.
#[derive(Debug)]
pub enum AuthUiEvent {
    /// A register or login call completed.
    ///
    /// `generation` is the submit generation the call was spawned with;
    /// the reducer discards outcomes from stale generations.
    Completed {
        generation: u64,
        kind: SubmitKind,
        outcome: AuthOutcome,
    },
}
