//! Entrained chorus.
//!
//! Multi-voice chorus whose delay modulators are members of a coupled LFO
//! group. With no coupling the voices drift independently like a regular
//! chorus. Raising the coupling pulls the modulators into phase and the sound
//! turns from shimmering into a coherent pulse.

use crate::error::ConfigError;
use crate::oscillator::coupled_lfo::{
    validate_coupling, validate_frequency, validate_parameter, CoupledLfoGroup,
};
use crate::oscillator::lfo::LfoShape;
use crate::utils::delay_line::DelayLine;
use crate::utils::{crossfade, linear};
use crate::SAMPLES_PER_MSEC;

pub const ENTRAINED_VOICES: usize = 3;

const CENTER_DELAY_MS: f32 = 15.0;
const DETUNE: f32 = 0.15;
const DELAY_LINE_SIZE: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrainedParameters {
    /// Coupling strength K. 0 is a free chorus, 1 a locked unison.
    pub coupling: f32,

    /// Base LFO rate, 0.2 to 5 Hz.
    pub rate: f32,

    /// Delay modulation depth, 0 to 100%.
    pub depth: f32,

    /// Dry/wet balance.
    pub mix: f32,
}

impl Default for EntrainedParameters {
    fn default() -> Self {
        Self {
            coupling: 0.5,
            rate: 0.5,
            depth: 0.5,
            mix: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntrainedChorus {
    group: CoupledLfoGroup,
    line: DelayLine<DELAY_LINE_SIZE>,
    delay_base: f32,
    depth: f32,
    mix: f32,
}

impl Default for EntrainedChorus {
    fn default() -> Self {
        Self::new()
    }
}

impl EntrainedChorus {
    pub fn new() -> Self {
        Self {
            group: CoupledLfoGroup::new(),
            line: DelayLine::new(),
            delay_base: CENTER_DELAY_MS * SAMPLES_PER_MSEC,
            depth: 0.0,
            mix: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.group = CoupledLfoGroup::new();
        self.line.reset();
    }

    /// Applies new parameters. Voice phases are kept once the group exists so
    /// this can be called on every block.
    pub fn init(&mut self, parameters: &EntrainedParameters) -> Result<(), ConfigError> {
        validate_parameter("coupling", parameters.coupling)?;
        validate_parameter("rate", parameters.rate)?;
        validate_parameter("depth", parameters.depth)?;
        validate_parameter("mix", parameters.mix)?;

        let coupling = parameters.coupling.clamp(0.0, 1.0);
        let rate = linear(parameters.rate.clamp(0.0, 1.0), 0.2, 5.0);

        // Voices are spread by ±15% around the base rate.
        let frequencies: [f32; ENTRAINED_VOICES] = core::array::from_fn(|voice| {
            rate * (1.0 + (voice as f32 - (ENTRAINED_VOICES / 2) as f32) * DETUNE)
        });

        validate_coupling(coupling)?;
        for frequency in frequencies {
            validate_frequency(frequency)?;
        }

        if self.group.count() != ENTRAINED_VOICES {
            self.group.init(ENTRAINED_VOICES, coupling)?;
        } else {
            self.group.set_coupling(coupling)?;
        }

        for (voice, frequency) in frequencies.into_iter().enumerate() {
            self.group.set_frequency(voice, frequency)?;
        }

        self.depth = parameters.depth.clamp(0.0, 1.0);
        self.mix = parameters.mix.clamp(0.0, 1.0);

        log::debug!(
            "Entrained chorus: K={coupling} rate={rate} Hz depth={} mix={}",
            self.depth,
            self.mix
        );

        Ok(())
    }

    /// Current phase coherence of the voice modulators.
    #[inline]
    pub fn synchrony(&self) -> f32 {
        self.group.order_parameter()
    }

    #[inline]
    pub fn group(&self) -> &CoupledLfoGroup {
        &self.group
    }

    #[inline]
    pub fn process(&mut self, in_: f32) -> f32 {
        let mut wet = 0.0;

        for voice in 0..self.group.count() {
            let lfo = self.group.next(voice, LfoShape::Sine);
            let delay = (self.delay_base * (1.0 + lfo * self.depth * 0.5)).max(1.0);
            wet += self.line.read_frac(delay);
        }

        wet /= ENTRAINED_VOICES as f32;

        self.line.write(in_);

        crossfade(in_, wet, self.mix)
    }

    #[inline]
    pub fn process_replacing(&mut self, in_out: &mut [f32]) {
        for in_out_sample in in_out.iter_mut() {
            *in_out_sample = self.process(*in_out_sample);
        }
    }
}
