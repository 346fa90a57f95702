//! Clock port — source of reading timestamps.

use thermodisplay_domain::time::{self, Timestamp};

pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
