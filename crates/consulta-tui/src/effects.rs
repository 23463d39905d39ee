//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent task spawning only; the reducer itself never performs I/O
//! or blocks. Each spawned store call carries the submit generation it was
//! started under so the reducer can discard outcomes that complete after a
//! logout or mode switch.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Spawn an async account registration.
    SpawnRegister {
        generation: u64,
        full_name: String,
        email: String,
        password: String,
    },

    /// Spawn an async account login.
    SpawnLogin {
        generation: u64,
        email: String,
        password: String,
    },
}
