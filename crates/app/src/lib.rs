//! # patternbook-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PaymentProcessor` — take a payment, return a receipt
//! - Provide the **use-cases** built on the domain:
//!   - `OfficeRegistry` — the run's single collection of rooms
//!   - `BookRoomCommand` / `CancelBookingCommand` — booking actions as values
//!   - `SharedConnection` — lazily opened, shared database connection
//!
//! ## Dependency rule
//! Depends on `patternbook-domain` only (plus `tracing` for instrumentation).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod commands;
pub mod connection;
pub mod ports;
pub mod registry;
