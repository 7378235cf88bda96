//! Configuration module for pyrees
//!
//! This module handles:
//! - Project-level configuration (pyrees.toml)
//! - Conversion curve overrides
//! - CLI defaults

mod project_config;

pub use project_config::load_project_config;
