//! Elemental - Interactive Periodic Table Explorer
//!
//! Shared logic for the two binaries: the table viewer (`elemental`) and
//! the signup/login screen (`elemental_login`). Everything that does not
//! need a display server lives here so it can be unit tested.

pub mod auth;
pub mod config;
pub mod model;
pub mod rendering;
pub mod state;
pub mod ui;
