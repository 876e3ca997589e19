//! UI Forge CLI library.
//!
//! This crate provides the command implementations behind the `uiforge`
//! binary: config loading, field assignments, logging setup, and the
//! render/defaults/validate/kinds commands.

pub mod commands;
pub mod input;
pub mod logging;
