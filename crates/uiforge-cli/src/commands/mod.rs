//! CLI command implementations

pub mod defaults;
pub mod json_output;
pub mod kinds;
pub mod render;
pub mod validate;
