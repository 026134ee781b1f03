//! Tremolo.
//!
//! Amplitude modulation by a sine or triangle LFO.

use crate::error::ConfigError;
use crate::oscillator::coupled_lfo::{validate_frequency, validate_parameter};
use crate::oscillator::lfo::{Lfo, LfoShape};
use crate::utils::linear;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TremoloParameters {
    /// LFO rate, 0.5 to 15 Hz.
    pub rate: f32,

    /// Modulation depth, 0 to 100%.
    pub depth: f32,

    /// Below 0.5 selects a sine, above a triangle.
    pub shape: f32,
}

impl Default for TremoloParameters {
    fn default() -> Self {
        Self {
            rate: 0.5,
            depth: 0.5,
            shape: 0.5,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tremolo {
    lfo: Lfo,
    depth: f32,
    shape: LfoShape,
}

impl Tremolo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.lfo.reset();
    }

    /// Applies new parameters. The LFO keeps its phase so this can be called
    /// on every block without clicks.
    pub fn init(&mut self, parameters: &TremoloParameters) -> Result<(), ConfigError> {
        validate_parameter("rate", parameters.rate)?;
        validate_parameter("depth", parameters.depth)?;
        validate_parameter("shape", parameters.shape)?;

        let rate = linear(parameters.rate.clamp(0.0, 1.0), 0.5, 15.0);
        validate_frequency(rate)?;

        self.lfo.set_frequency(rate);
        self.depth = parameters.depth.clamp(0.0, 1.0);
        self.shape = if parameters.shape < 0.5 {
            LfoShape::Sine
        } else {
            LfoShape::Triangle
        };

        log::debug!(
            "Tremolo: rate={rate} Hz depth={} shape={:?}",
            self.depth,
            self.shape
        );

        Ok(())
    }

    #[inline]
    pub fn process(&mut self, in_: f32) -> f32 {
        let lfo = self.lfo.next(self.shape);

        // lfo = 1 leaves the signal untouched, lfo = -1 attenuates by depth.
        let gain = 1.0 - self.depth * (1.0 - lfo) * 0.5;

        in_ * gain
    }

    #[inline]
    pub fn process_replacing(&mut self, in_out: &mut [f32]) {
        for in_out_sample in in_out.iter_mut() {
            *in_out_sample = self.process(*in_out_sample);
        }
    }
}
