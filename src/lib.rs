//! pfm - terminal client for a personal finance manager backend
//!
//! The backend owns every entity (income, expenses, budgets, savings goals);
//! this crate authenticates against it, fetches lists per page, derives the
//! dashboard and report aggregates locally and sends the user's changes back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Entities exchanged with the backend
//! - `api`: REST client and response envelopes
//! - `session`: Bearer-token storage and the signed-in user
//! - `services`: Typed per-resource calls with request validation
//! - `views`: Per-page loaders with cancellation scopes
//! - `reports`: Pure aggregates over fetched lists
//! - `display`: Currency formatting and terminal tables
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pfm::api::ApiClient;
//! use pfm::config::{PfmPaths, Settings};
//! use pfm::session::{FileTokenStore, Session};
//!
//! let paths = PfmPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let tokens = Arc::new(FileTokenStore::new(paths.session_file()));
//! let mut session = Session::new(ApiClient::new(&settings.api_url, tokens)?)?;
//! session.restore().await?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod views;

pub use error::{PfmError, PfmResult};
