//! Full-screen TUI for consulta.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
use consulta_core::accounts::FileAccountStore;
use consulta_core::config::Config;
pub use features::{auth, catalog};
pub use runtime::TuiRuntime;

/// Runs the interactive application.
pub async fn run_app(config: &Config) -> Result<()> {
    // The TUI requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "consulta requires a terminal.\n\
             Use `consulta register` / `consulta login` for non-interactive use."
        );
    }

    let store = Arc::new(FileAccountStore::open(config.accounts_path()));
    let mut runtime = TuiRuntime::new(store)?;
    runtime.run()
}
