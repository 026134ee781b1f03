//! Effects driven by the LFOs.
//!
//! Parameters are normalized to `0.0..=1.0` like the knobs of a pedal and are
//! mapped to physical ranges inside each effect.

pub mod entrained;
pub mod tremolo;
