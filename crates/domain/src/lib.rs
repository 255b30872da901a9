//! # patternbook-domain
//!
//! Pure domain model for the patternbook design-pattern demonstrations.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, booking slots
//! - A generic **observer** list with ordered, synchronous notification
//! - **Rooms** whose occupancy switches their air conditioning and lights
//! - A **weather monitor** pushing readings to displays
//! - Interchangeable **sorting strategies**
//! - A **shape factory** keyed by name
//! - **Coffee** decorated with add-ons
//! - **Payment receipts** shared by every payment processor
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Every value is returned to the caller, which decides what to print.

pub mod error;
pub mod id;
pub mod time;

pub mod coffee;
pub mod observer;
pub mod payment;
pub mod room;
pub mod shape;
pub mod sorting;
pub mod weather;
