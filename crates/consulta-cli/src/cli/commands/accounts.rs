//! Headless register and login.
//!
//! Same validation and the same account store as the TUI; useful for
//! scripting and for terminals the TUI refuses to run in.

use anyhow::{Result, bail};
use consulta_core::accounts::{AuthOutcome, FileAccountStore};
use consulta_core::config::Config;
use consulta_core::validate;

pub async fn register(config: &Config, name: &str, email: &str, password: &str) -> Result<()> {
    // The confirm-password check is a form concern; flags have no second entry.
    if let Some(message) = validate::validate_register(name, email, password, password) {
        bail!("{message}");
    }

    let store = FileAccountStore::open(config.accounts_path());
    match store.register(name, email, password).await {
        AuthOutcome::Success(account) => {
            tracing::info!(id = account.id, "registered account");
            println!("Welcome, {}", account.full_name);
            Ok(())
        }
        AuthOutcome::Error(message) => bail!("{message}"),
    }
}

pub async fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    if let Some(message) = validate::validate_login(email, password) {
        bail!("{message}");
    }

    let store = FileAccountStore::open(config.accounts_path());
    match store.login(email, password).await {
        AuthOutcome::Success(account) => {
            tracing::info!(id = account.id, "login succeeded");
            println!("Welcome back, {}", account.full_name);
            Ok(())
        }
        AuthOutcome::Error(message) => bail!("{message}"),
    }
}
