//! # patternbook — composition root
//!
//! Wires the domain, application and adapter crates together and drives the
//! two console demonstrations.
//!
//! ## Responsibilities
//! - Load configuration (`patternbook.toml`, environment overrides)
//! - Install the log subscriber (stderr)
//! - Create the run's context objects (room registry, shared connection)
//! - Play the `office` and `showcase` transcripts against any writer
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod logging;
pub mod office;
pub mod showcase;
