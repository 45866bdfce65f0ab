//! Core domain logic (adapter-agnostic)
//!
//! This module contains all business logic that is independent of how
//! the application is driven (CLI today, anything else tomorrow).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Entity variants and response types
//! - **xdg**: XDG directory handling
//! - **store**: Collection snapshot loading
//! - **search**: Query parsing, scoring, and ranking
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod store;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, TandemError};
pub use services::Services;
pub use store::Library;
