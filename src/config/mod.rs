//! Configuration module for fourthstep
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::InventoryPaths;
pub use settings::Settings;
