//! Operator console on standard output.

use std::io::Write;

use thermodisplay_app::ports::Console;

/// Writes each line to stdout and flushes, so piped output stays live.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&mut self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(%err, "failed to write console line");
        }
    }
}
