//! Sine and cosine of a u32 phase.
//!
//! The full u32 range maps onto one turn. Only a quarter wave is stored; the
//! other three quadrants are folded onto it by mirroring and sign flips, and
//! adjacent table entries are linearly interpolated. Maximum absolute error is
//! well below 1e-4.

use crate::resources::sine::{quarter_sine, QUARTER_SINE_BITS};
use crate::utils::{fraction_to_phase, u32_to_fraction, QUARTER_TURN, TWO_POW_32};

/// Folds `phase` into its quadrant.
///
/// Returns the quadrant number (`0..4`) and the position inside the quarter
/// wave, already mirrored for the odd quadrants where sine runs backwards.
#[inline]
pub(crate) fn fold_quadrant(phase: u32) -> (u32, u32) {
    let quarter = phase >> 30;
    let mut residual = phase << 2;

    if quarter & 1 != 0 {
        residual = !residual;
    }

    (quarter, residual)
}

#[inline]
pub fn phase_sin(phase: u32) -> f32 {
    let (quarter, residual) = fold_quadrant(phase);
    let table = quarter_sine();

    let index = (residual >> (32 - QUARTER_SINE_BITS)) as usize;
    let a = table[index];
    let b = table[index + 1];
    let value = a + (b - a) * u32_to_fraction(residual << QUARTER_SINE_BITS);

    if quarter & 2 != 0 {
        -value
    } else {
        value
    }
}

#[inline]
pub fn phase_cos(phase: u32) -> f32 {
    phase_sin(phase.wrapping_add(QUARTER_TURN))
}

/// Converts a phase to radians in `0.0..2π`.
#[inline]
pub fn phase_to_radians(phase: u32) -> f64 {
    phase as f64 / TWO_POW_32 * core::f64::consts::TAU
}

/// Converts an angle in radians to a phase. Negative angles and angles beyond
/// one turn wrap.
#[inline]
pub fn radians_to_phase(radians: f64) -> u32 {
    fraction_to_phase((radians / core::f64::consts::TAU) as f32)
}
