//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the control loop and the hardware.
//! They are defined here (in `app`) so that both the loop and the adapter
//! crates can depend on them without creating circular dependencies.
//!
//! Bus transfers are short and blocking, so the ports are plain synchronous
//! traits; the only suspension point of the loop is its interval sleep.

pub mod clock;
pub mod console;
pub mod display;
pub mod sensor;

pub use clock::{Clock, SystemClock};
pub use console::Console;
pub use display::DisplayPanel;
pub use sensor::TemperatureSensor;
