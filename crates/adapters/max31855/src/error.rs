//! MAX31855 adapter error types.

use thermodisplay_domain::error::{Fault, FaultKind};

/// Fault conditions latched by the MAX31855 itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FaultCondition {
    /// OC bit: the thermocouple is not connected.
    #[error("thermocouple open circuit")]
    OpenCircuit,
    /// SCG bit.
    #[error("thermocouple short circuit to ground")]
    ShortToGround,
    /// SCV bit.
    #[error("thermocouple short circuit to VCC")]
    ShortToVcc,
    /// Fault bit set without any condition bit.
    #[error("faulty reading")]
    Faulty,
}

impl FaultCondition {
    #[must_use]
    pub fn kind(self) -> FaultKind {
        match self {
            Self::OpenCircuit => FaultKind::OpenCircuit,
            Self::ShortToGround | Self::ShortToVcc => FaultKind::ShortCircuit,
            Self::Faulty => FaultKind::Unknown,
        }
    }
}

/// Errors specific to the MAX31855 adapter.
#[derive(Debug, thiserror::Error)]
pub enum Max31855Error<E: std::fmt::Debug> {
    /// The chip reported a thermocouple fault.
    #[error(transparent)]
    Condition(#[from] FaultCondition),

    /// The SPI transfer itself failed.
    #[error("SPI transfer failed: {0:?}")]
    Spi(E),
}

impl<E: std::fmt::Debug> Max31855Error<E> {
    /// Convert into a [`Fault`] for the sensor port.
    ///
    /// Chip conditions keep their structured kind. Bus failures are
    /// reported as [`FaultKind::Unknown`] so the loop shows `TC Error` and
    /// retries on the next cycle.
    #[must_use]
    pub fn into_fault(self) -> Fault {
        let kind = match &self {
            Self::Condition(condition) => condition.kind(),
            Self::Spi(_) => FaultKind::Unknown,
        };
        Fault::new(kind, self.to_string())
    }
}

impl<E: std::fmt::Debug> From<Max31855Error<E>> for Fault {
    fn from(err: Max31855Error<E>) -> Self {
        err.into_fault()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::ErrorKind;

    #[test]
    fn should_display_open_circuit_condition() {
        assert_eq!(
            FaultCondition::OpenCircuit.to_string(),
            "thermocouple open circuit"
        );
    }

    #[test]
    fn should_map_conditions_to_kinds() {
        assert_eq!(FaultCondition::OpenCircuit.kind(), FaultKind::OpenCircuit);
        assert_eq!(FaultCondition::ShortToGround.kind(), FaultKind::ShortCircuit);
        assert_eq!(FaultCondition::ShortToVcc.kind(), FaultKind::ShortCircuit);
        assert_eq!(FaultCondition::Faulty.kind(), FaultKind::Unknown);
    }

    #[test]
    fn should_agree_with_message_classifier() {
        for condition in [
            FaultCondition::OpenCircuit,
            FaultCondition::ShortToGround,
            FaultCondition::ShortToVcc,
            FaultCondition::Faulty,
        ] {
            assert_eq!(
                FaultKind::classify(&condition.to_string()),
                condition.kind(),
                "{condition}"
            );
        }
    }

    #[test]
    fn should_convert_condition_into_structured_fault() {
        let err: Max31855Error<ErrorKind> = FaultCondition::ShortToVcc.into();
        let fault: Fault = err.into();
        assert_eq!(fault.kind(), FaultKind::ShortCircuit);
        assert_eq!(fault.message(), "thermocouple short circuit to VCC");
    }

    #[test]
    fn should_convert_spi_failure_into_unknown_fault() {
        let fault = Max31855Error::Spi(ErrorKind::ModeFault).into_fault();
        assert_eq!(fault.kind(), FaultKind::Unknown);
        assert_eq!(fault.message(), "SPI transfer failed: ModeFault");
    }
}
