//! Core types and configuration for local-push.
//!
//! This crate defines the build identity ([`BuildInfo`]), the optional
//! `local-push.toml` schema ([`LocalPushConfig`]), the Cloud Foundry session
//! context handed over by the host CLI ([`SessionContext`]), and shared error
//! types.

pub mod config;
pub mod context;
pub mod error;
pub mod version;

pub use config::{BuildConfig, LocalPushConfig, RunConfig, SERVICE_USER};
pub use context::SessionContext;
pub use error::{Error, Result};
pub use version::BuildInfo;
