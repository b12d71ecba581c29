//! Chat Service Configuration
//!
//! Operator-tunable settings loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `BUDS_CONFIG` environment variable (path to TOML file)
//! 2. `buds_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded [`ChatConfig`] is passed by value into the components that
//! need it; there is no process-global config.

mod chat_config;
pub mod defaults;
pub mod validation;

pub use chat_config::*;
