//! Time and timestamp helpers.

use chrono::{Local, NaiveDateTime};

/// Local wall-clock timestamp attached to every reading.
///
/// The panel and console both show the time of day as seen by the operator,
/// so readings carry local time rather than UTC.
pub type Timestamp = NaiveDateTime;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().naive_local()
}
