//! Configuration module for Product-Search-RS
//!
//! Handles loading settings from a YAML file and environment variables.

mod settings;

pub use settings::*;
