//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.

pub mod add;
pub mod check;
pub mod diff;
pub mod fmt;
pub mod list;
pub mod pin;
pub mod remove;
