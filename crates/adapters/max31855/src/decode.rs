//! MAX31855 output word decoder.
//!
//! Pure functions on the raw 32-bit word — no bus needed.
//!
//! | Bits | Field | Type |
//! |------|-------|------|
//! | 31–18 | Thermocouple temperature | i14, x0.25 C |
//! | 16 | Fault | any fault bit below is set |
//! | 15–4 | Cold-junction temperature | i12, x0.0625 C |
//! | 2 | SCV | short to VCC |
//! | 1 | SCG | short to GND |
//! | 0 | OC | open circuit |

use crate::error::FaultCondition;

const FAULT: i32 = 1 << 16;
const SHORT_TO_VCC: i32 = 1 << 2;
const SHORT_TO_GROUND: i32 = 1 << 1;
const OPEN_CIRCUIT: i32 = 1;

/// Decoded conversion result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Hot-junction temperature in degrees Celsius.
    pub thermocouple_celsius: f64,
    /// Cold-junction (die) temperature in degrees Celsius.
    pub cold_junction_celsius: f64,
}

/// Decode the word clocked out of the MAX31855, most significant byte first.
///
/// # Errors
///
/// Returns the reported [`FaultCondition`] when the fault bit is set. When
/// several condition bits are set, open circuit wins over the shorts.
pub fn decode(bytes: [u8; 4]) -> Result<Sample, FaultCondition> {
    let word = i32::from_be_bytes(bytes);

    if word & FAULT != 0 {
        return Err(if word & OPEN_CIRCUIT != 0 {
            FaultCondition::OpenCircuit
        } else if word & SHORT_TO_GROUND != 0 {
            FaultCondition::ShortToGround
        } else if word & SHORT_TO_VCC != 0 {
            FaultCondition::ShortToVcc
        } else {
            FaultCondition::Faulty
        });
    }

    // Arithmetic shifts sign-extend both fields.
    let thermocouple = word >> 18;
    let cold_junction = (word << 16) >> 20;

    Ok(Sample {
        thermocouple_celsius: f64::from(thermocouple) * 0.25,
        cold_junction_celsius: f64::from(cold_junction) * 0.0625,
    })
}
