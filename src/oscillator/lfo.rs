//! Low frequency oscillator driven by a u32 phase accumulator.
//!
//! The phase wraps naturally at 2^32, which is one full turn. No floating
//! point time is kept, so the oscillator never drifts.

use super::sine::{fold_quadrant, phase_sin};
use crate::utils::{frequency_to_step, ms_to_step, u32_to_fraction};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LfoShape {
    /// Sine in `-1.0..=1.0`.
    #[default]
    Sine,

    /// Triangle in `-1.0..=1.0`, in phase with the sine.
    Triangle,

    /// Rising ramp in `0.0..1.0`.
    Sawtooth,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lfo {
    phase: u32,
    step: u32,
}

impl Lfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.phase = 0;
        self.step = 0;
    }

    /// Sets the rate in Hz. Expected to be positive and below Nyquist.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.step = frequency_to_step(frequency);
    }

    /// Sets the rate as the length of one period in milliseconds.
    pub fn set_period_ms(&mut self, ms: f32) {
        self.step = ms_to_step(ms);
    }

    #[inline]
    pub fn set_phase(&mut self, phase: u32) {
        self.phase = phase;
    }

    #[inline]
    pub fn phase(&self) -> u32 {
        self.phase
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Shifts the phase by a signed amount without advancing the oscillator.
    #[inline]
    pub(crate) fn nudge(&mut self, delta: i32) {
        self.phase = self.phase.wrapping_add_signed(delta);
    }

    /// Returns the waveform at the current phase, then advances by one sample.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, shape: LfoShape) -> f32 {
        let phase = self.phase;
        self.phase = phase.wrapping_add(self.step);

        waveform(phase, shape)
    }

    #[inline]
    pub fn render(&mut self, shape: LfoShape, out: &mut [f32]) {
        for out_sample in out.iter_mut() {
            *out_sample = self.next(shape);
        }
    }
}

/// Evaluates a waveform at a phase without any oscillator state.
#[inline]
pub fn waveform(phase: u32, shape: LfoShape) -> f32 {
    match shape {
        LfoShape::Sine => phase_sin(phase),
        LfoShape::Triangle => {
            let (quarter, residual) = fold_quadrant(phase);
            let value = u32_to_fraction(residual);

            if quarter & 2 != 0 {
                -value
            } else {
                value
            }
        }
        LfoShape::Sawtooth => u32_to_fraction(phase),
    }
}
