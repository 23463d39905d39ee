//! Core domain and persistence for consulta.
//!
//! UI-independent pieces: configuration, logging setup, the account store
//! (the persistence boundary behind registration/login), credential
//! validation rules, and the consultation catalog.

pub mod accounts;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod validate;
