//! # thermodisplay-domain
//!
//! Pure domain model for the thermocouple display.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Readings** (one Celsius sample and the instant it was taken)
//! - Define **Faults** (classified sensor failures: open, short, unknown)
//! - Define **Display frames** (the text fields drawn on the panel each cycle)
//! - Format the per-cycle console report
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod frame;
pub mod reading;
pub mod report;
