//! Sensor fault taxonomy.
//!
//! A failed read produces a [`Fault`]: a [`FaultKind`] plus the raw
//! diagnostic text reported by the sensor. Faults never leave the control
//! loop; they are turned into an error frame and a console line.

/// Closed set of thermocouple failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Thermocouple wiring is disconnected.
    OpenCircuit,
    /// Thermocouple is shorted to ground or to the supply rail.
    ShortCircuit,
    /// Anything else the sensor complained about.
    Unknown,
}

impl FaultKind {
    /// Classify a free-text diagnostic message.
    ///
    /// Matching is case-insensitive and order-sensitive: a message that
    /// mentions both an open circuit and a short is an [`OpenCircuit`](Self::OpenCircuit).
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        if message.contains("open circuit") {
            Self::OpenCircuit
        } else if message.contains("short") {
            Self::ShortCircuit
        } else {
            Self::Unknown
        }
    }

    /// Short code shown on the panel under the `ERROR:` title.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::OpenCircuit => "TC Open",
            Self::ShortCircuit => "TC Short",
            Self::Unknown => "TC Error",
        }
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A classified sensor failure carrying the raw diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
}

impl Fault {
    /// Build a fault whose kind is already known to the sensor driver.
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build a fault from free text, classifying it with [`FaultKind::classify`].
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: FaultKind::classify(&message),
            message,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The diagnostic text exactly as the sensor reported it.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_open_circuit_message() {
        assert_eq!(
            FaultKind::classify("Thermocouple open circuit detected"),
            FaultKind::OpenCircuit
        );
    }

    #[test]
    fn should_classify_open_circuit_case_insensitively() {
        assert_eq!(FaultKind::classify("OPEN CIRCUIT"), FaultKind::OpenCircuit);
        assert_eq!(FaultKind::classify("Open Circuit"), FaultKind::OpenCircuit);
    }

    #[test]
    fn should_classify_short_message() {
        assert_eq!(
            FaultKind::classify("wire shorted to ground"),
            FaultKind::ShortCircuit
        );
        assert_eq!(FaultKind::classify("SHORT to VCC"), FaultKind::ShortCircuit);
    }

    #[test]
    fn should_fall_back_to_unknown() {
        assert_eq!(FaultKind::classify("CRC mismatch"), FaultKind::Unknown);
        assert_eq!(FaultKind::classify(""), FaultKind::Unknown);
    }

    #[test]
    fn should_prefer_open_circuit_when_both_match() {
        assert_eq!(
            FaultKind::classify("short detected after open circuit"),
            FaultKind::OpenCircuit
        );
    }

    #[test]
    fn should_not_match_open_without_circuit() {
        assert_eq!(FaultKind::classify("open loop"), FaultKind::Unknown);
        assert_eq!(FaultKind::classify("opencircuit"), FaultKind::Unknown);
    }

    #[test]
    fn should_map_kinds_to_panel_codes() {
        assert_eq!(FaultKind::OpenCircuit.code(), "TC Open");
        assert_eq!(FaultKind::ShortCircuit.code(), "TC Short");
        assert_eq!(FaultKind::Unknown.code(), "TC Error");
    }

    #[test]
    fn should_display_kind_as_code() {
        assert_eq!(FaultKind::ShortCircuit.to_string(), "TC Short");
    }

    #[test]
    fn should_classify_when_built_from_message() {
        let fault = Fault::from_message("wire shorted to ground");
        assert_eq!(fault.kind(), FaultKind::ShortCircuit);
        assert_eq!(fault.message(), "wire shorted to ground");
    }

    #[test]
    fn should_keep_structured_kind_over_message_text() {
        let fault = Fault::new(FaultKind::OpenCircuit, "thermocouple not connected");
        assert_eq!(fault.kind(), FaultKind::OpenCircuit);
    }

    #[test]
    fn should_display_raw_message() {
        let fault = Fault::from_message("CRC mismatch");
        assert_eq!(fault.to_string(), "CRC mismatch");
    }
}
