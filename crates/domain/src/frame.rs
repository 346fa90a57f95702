//! Display frames — the text content of one screenful.
//!
//! A frame fully replaces whatever was on the panel before it. The layout
//! (positions, fonts) belongs to the renderer; frames only carry text.

use crate::error::Fault;
use crate::reading::Reading;

/// Label drawn under the temperature value.
pub const TEMPERATURE_LABEL: &str = "Temperature";

/// Title drawn above the fault code.
pub const ERROR_TITLE: &str = "ERROR:";

/// What the panel should show for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayFrame {
    /// A successful reading.
    Reading {
        /// Emphasised value, e.g. `68.0°F`.
        primary_text: String,
        label_text: String,
        /// `HH:MM:SS`.
        time_text: String,
        /// `MM/DD/YYYY`.
        date_text: String,
    },
    /// A sensor fault.
    Error { title: String, detail: String },
    /// Every pixel off.
    Blank,
}

impl DisplayFrame {
    /// Build the frame for a successful reading.
    #[must_use]
    pub fn reading(reading: &Reading) -> Self {
        Self::Reading {
            primary_text: format!("{:.1}\u{b0}F", reading.fahrenheit()),
            label_text: TEMPERATURE_LABEL.to_string(),
            time_text: reading.captured_at.format("%H:%M:%S").to_string(),
            date_text: reading.captured_at.format("%m/%d/%Y").to_string(),
        }
    }

    /// Build the frame for a sensor fault.
    #[must_use]
    pub fn fault(fault: &Fault) -> Self {
        Self::Error {
            title: ERROR_TITLE.to_string(),
            detail: fault.kind().code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Fault, FaultKind};
    use chrono::NaiveDate;

    fn reading(celsius: f64) -> Reading {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 3)
            .unwrap();
        Reading::new(celsius, at)
    }

    #[test]
    fn should_build_reading_frame_in_fahrenheit() {
        let frame = DisplayFrame::reading(&reading(20.0));
        assert_eq!(
            frame,
            DisplayFrame::Reading {
                primary_text: "68.0\u{b0}F".to_string(),
                label_text: "Temperature".to_string(),
                time_text: "07:05:03".to_string(),
                date_text: "03/09/2024".to_string(),
            }
        );
    }

    #[test]
    fn should_format_value_with_one_decimal() {
        let DisplayFrame::Reading { primary_text, .. } = DisplayFrame::reading(&reading(21.37))
        else {
            panic!("expected a reading frame");
        };
        assert_eq!(primary_text, "70.5\u{b0}F");
    }

    #[test]
    fn should_build_error_frame_for_open_circuit() {
        let fault = Fault::from_message("Thermocouple open circuit detected");
        assert_eq!(
            DisplayFrame::fault(&fault),
            DisplayFrame::Error {
                title: "ERROR:".to_string(),
                detail: "TC Open".to_string(),
            }
        );
    }

    #[test]
    fn should_use_structured_kind_for_error_detail() {
        let fault = Fault::new(FaultKind::ShortCircuit, "bit 1 set");
        let DisplayFrame::Error { detail, .. } = DisplayFrame::fault(&fault) else {
            panic!("expected an error frame");
        };
        assert_eq!(detail, "TC Short");
    }
}
