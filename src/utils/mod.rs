//! Utility functions.
//!
//! Numeric helpers shared between the oscillators and the effects.

pub mod delay_line;

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::{SAMPLES_PER_MSEC, SAMPLE_RATE};

/// One full turn of a u32 phase.
pub const TWO_POW_32: f64 = 4294967296.0;

/// Phase offset of a quarter turn.
pub const QUARTER_TURN: u32 = 1 << 30;

/// Maps a u32 to `0.0..1.0`.
///
/// Only the upper 24 bits are used so the result is exact in f32 and never
/// rounds up to 1.0.
#[inline]
pub fn u32_to_fraction(value: u32) -> f32 {
    (value >> 8) as f32 * (1.0 / 16777216.0)
}

/// Maps a fraction of a turn to a phase. Values outside `0.0..1.0` wrap.
#[inline]
pub fn fraction_to_phase(fraction: f32) -> u32 {
    let fraction = fraction as f64 - (fraction as f64).floor();
    (fraction * TWO_POW_32) as u64 as u32
}

/// Phase increment per sample for a frequency in Hz.
#[inline]
pub fn frequency_to_step(frequency: f32) -> u32 {
    (frequency as f64 / SAMPLE_RATE as f64 * TWO_POW_32).round() as u32
}

/// Phase increment per sample for a period in milliseconds.
#[inline]
pub fn ms_to_step(ms: f32) -> u32 {
    (TWO_POW_32 / (ms as f64 * SAMPLES_PER_MSEC as f64)).round() as u32
}

/// Maps a normalized control value in `0.0..=1.0` onto `min..=max`.
#[inline]
pub fn linear(value: f32, min: f32, max: f32) -> f32 {
    min + value * (max - min)
}

#[inline]
pub fn crossfade(a: f32, b: f32, fade: f32) -> f32 {
    a + (b - a) * fade
}
