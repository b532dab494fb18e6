//! Configuration module for pfm
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - API endpoint overrides

pub mod paths;
pub mod settings;

pub use paths::PfmPaths;
pub use settings::Settings;
