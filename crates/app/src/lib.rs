//! # thermodisplay-app
//!
//! Application layer — the control loop and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `TemperatureSensor` — read one Celsius value or fail with a `Fault`
//!   - `DisplayPanel` — a buffered 128×64 monochrome draw target
//!   - `Console` — print one report line
//!   - `Clock` — wall-clock time for readings
//! - Own the frame layout (`Renderer`)
//! - Run the poll/render cycle at a fixed cadence until shutdown (`Monitor`)
//!
//! ## Dependency rule
//! Depends on `thermodisplay-domain` only (plus `tokio::time` for the
//! interval and `embedded-graphics` for text rasterisation).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod monitor;
pub mod ports;
pub mod renderer;

#[cfg(test)]
mod testing;
