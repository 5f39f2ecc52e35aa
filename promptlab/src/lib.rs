//! Prompt Lab facade.
//!
//! Bundles the workspace crates behind feature flags so downstream users can
//! pull in only the validator or only the analytics engine.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use prompt_primitives as primitives;

/// Schema and semantic validation (enabled by `validator` feature).
#[cfg(feature = "validator")]
pub use prompt_validator as validator;

/// Corpus analytics and reporting (enabled by `analytics` feature).
#[cfg(feature = "analytics")]
pub use prompt_analytics as analytics;

/// Project configuration (enabled by `config` feature).
#[cfg(feature = "config")]
pub use prompt_config as config;

/// Tracing setup for binaries (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use prompt_telemetry as telemetry;
