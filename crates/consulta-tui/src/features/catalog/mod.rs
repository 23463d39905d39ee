//! Catalog feature slice: the home screen.
//!
//! Browsing, search/filter, slot selection, and session-local bookings over
//! the built-in consultation catalog.

pub mod render;
pub mod state;
pub mod update;

pub use state::CatalogState;
