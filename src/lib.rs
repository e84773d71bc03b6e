//! FourthStep - Terminal-based fourth-step resentment inventory
//!
//! This library provides the core functionality for the FourthStep journaling
//! application. It keeps a running list of resentments (who, what happened,
//! how it affects you, and your part in it) in a local JSON file, with both a
//! scriptable CLI and a full-screen TUI on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries and their identifiers)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use fourthstep::config::{paths::InventoryPaths, settings::Settings};
//!
//! let paths = InventoryPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::InventoryError;
