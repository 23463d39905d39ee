//! Command handlers.

pub mod accounts;
pub mod config;
