//! Configuration errors.
//!
//! Only the setup calls return these. Per-sample processing never fails.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("Group Size {count} Exceeds Capacity Of {max} Oscillators")]
    TooManyOscillators { count: usize, max: usize },

    #[error("Oscillator Index {index} Out Of Range For {count} Active Oscillators")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Frequency {0} Hz Is Outside The Playable Range")]
    InvalidFrequency(f32),

    #[error("Coupling Strength {0} Is Not Finite")]
    InvalidCoupling(f32),

    #[error("Period {0} ms Is Outside The Playable Range")]
    InvalidPeriod(f32),

    #[error("Parameter {name} Has Non-Finite Value {value}")]
    InvalidParameter { name: &'static str, value: f32 },
}
