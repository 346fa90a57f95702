//! Monitor — the read, convert, render, wait loop.
//!
//! Each cycle reads the sensor once. A reading becomes a temperature frame
//! and a console line; a fault becomes an error frame and a console line.
//! Either way the loop then waits the same fixed interval. Sensor faults
//! never escape a cycle; a panel that cannot be reached ends the loop.
//!
//! Shutdown is observed between cycles. The panel is blanked on a best-effort
//! basis and nothing is printed after the exit notice.

use std::future::Future;
use std::time::Duration;

use thermodisplay_domain::frame::DisplayFrame;
use thermodisplay_domain::reading::Reading;
use thermodisplay_domain::report;

use crate::ports::{Clock, Console, DisplayPanel, TemperatureSensor};
use crate::renderer::Renderer;

/// Default delay between two cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Errors that end the loop.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError<E: std::fmt::Debug> {
    /// The panel rejected a frame.
    #[error("display update failed: {0:?}")]
    Display(E),
}

/// Drives the sensor and the panel until shutdown.
pub struct Monitor<S, D, C, K> {
    sensor: S,
    renderer: Renderer<D>,
    console: C,
    clock: K,
    interval: Duration,
}

impl<S, D, C, K> Monitor<S, D, C, K>
where
    S: TemperatureSensor,
    D: DisplayPanel,
    C: Console,
    K: Clock,
{
    pub fn new(sensor: S, panel: D, console: C, clock: K) -> Self {
        Self {
            sensor,
            renderer: Renderer::new(panel),
            console,
            clock,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Override the delay between cycles.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run one cycle: read, then render and report. Returns the frame shown.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Display`] when the panel cannot be updated.
    /// Sensor faults are not errors here; they produce an error frame.
    #[tracing::instrument(skip_all)]
    pub fn cycle(&mut self) -> Result<DisplayFrame, MonitorError<D::Error>> {
        match self.sensor.read_celsius() {
            Ok(celsius) => {
                let reading = Reading::new(celsius, self.clock.now());
                tracing::debug!(
                    celsius,
                    fahrenheit = reading.fahrenheit(),
                    "temperature read"
                );
                let frame = DisplayFrame::reading(&reading);
                self.show(&frame)?;
                self.console.line(&report::reading_line(&reading));
                Ok(frame)
            }
            Err(fault) => {
                tracing::warn!(kind = ?fault.kind(), message = fault.message(), "sensor fault");
                self.console.line(&report::fault_line(&fault));
                let frame = DisplayFrame::fault(&fault);
                self.show(&frame)?;
                Ok(frame)
            }
        }
    }

    /// Cycle until `shutdown` resolves, then blank the panel.
    ///
    /// `shutdown` is only polled between cycles, so a cycle in progress
    /// always completes.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Display`] when the panel cannot be updated
    /// during a cycle. The shutdown blanking never fails the loop.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<(), MonitorError<D::Error>>
    where
        F: Future<Output = ()>,
    {
        let mut shutdown = std::pin::pin!(shutdown);

        for line in report::STARTUP_LINES {
            self.console.line(line);
        }
        self.show(&DisplayFrame::Blank)?;
        tracing::info!(interval_secs = self.interval.as_secs_f64(), "monitor started");

        loop {
            self.cycle()?;
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                () = tokio::time::sleep(self.interval) => {}
            }
        }

        self.console.line(report::SHUTDOWN_LINE);
        if let Err(err) = self.show(&DisplayFrame::Blank) {
            tracing::warn!(%err, "failed to blank display on shutdown");
        }
        tracing::info!("monitor stopped");
        Ok(())
    }

    fn show(&mut self, frame: &DisplayFrame) -> Result<(), MonitorError<D::Error>> {
        self.renderer.render(frame).map_err(MonitorError::Display)
    }
}
