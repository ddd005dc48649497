//! spec-scaffold: helpers for a spec-driven documentation workflow
//!
//! Feature workspaces live under `specs/` as `<number>-<short-name>`
//! directories. The binaries locate the latest one, scaffold new ones, and
//! print single-line JSON descriptors for downstream scripts.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod services;

pub use config::ProjectConfig;
pub use error::{AppError, Result};
