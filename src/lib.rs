//! fintrack - Command-line personal expense and budget-task tracker
//!
//! This library provides the core functionality for the fintrack application:
//! per-profile expense records and budget tasks, stored as JSON documents
//! behind a pluggable storage port, with pure filtering and aggregation on
//! top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, tasks, profiles)
//! - `storage`: Storage port and JSON repositories
//! - `services`: Business logic layer, including filtering
//! - `reports`: Derived aggregates (expense summary)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::TrackerPaths, settings::Settings};
//! use fintrack::storage::Store;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Store::open(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
