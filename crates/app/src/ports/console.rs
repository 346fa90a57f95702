//! Console port — where the per-cycle report line goes.

/// Line-oriented operator output.
///
/// This is product output (one line per cycle), not diagnostics; diagnostics
/// go through `tracing`.
pub trait Console {
    fn line(&mut self, line: &str);
}
