//! Group of LFOs coupled by the Kuramoto model.
//!
//! Each member follows
//!
//! ```text
//! dθᵢ/dt = ωᵢ + (K/N) Σⱼ sin(θⱼ − θᵢ)
//! ```
//!
//! discretized per sample. With `K = 0` the members run independently and
//! produce exactly the output of a standalone [`Lfo`]. As `K` grows, members
//! with similar rates pull each other into phase.
//!
//! The coupling term is scaled by the member's own phase increment, so `K = 1.0`
//! can bend its instantaneous rate by up to ±100% and `K = 0.1` by up to ±10%.
//! The perturbation is bounded by `K * step` every sample, so the group cannot
//! blow up no matter how long it runs.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::lfo::{Lfo, LfoShape};
use super::sine::{phase_cos, phase_sin, radians_to_phase};
use crate::error::ConfigError;
use crate::SAMPLE_RATE;

pub const MAX_COUPLED_LFOS: usize = 8;

/// Kuramoto order parameter as magnitude and mean phase.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OrderParameter {
    /// Phase coherence in `0.0..=1.0`. 1 means all members are in phase.
    pub r: f32,

    /// Phase of the mean field.
    pub mean_phase: u32,
}

#[derive(Debug, Default, Clone)]
pub struct CoupledLfoGroup {
    lfos: [Lfo; MAX_COUPLED_LFOS],
    count: usize,
    coupling: f32,
}

impl CoupledLfoGroup {
    /// Creates an empty group with no coupling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group with one member per frequency, all starting at phase 0.
    pub fn with_frequencies(frequencies: &[f32], coupling: f32) -> Result<Self, ConfigError> {
        let mut group = Self::new();
        group.init(frequencies.len(), coupling)?;

        for (index, frequency) in frequencies.iter().enumerate() {
            group.set_frequency(index, *frequency)?;
        }

        Ok(group)
    }

    /// Resets all members and sets the number of active members and the
    /// coupling strength.
    pub fn init(&mut self, count: usize, coupling: f32) -> Result<(), ConfigError> {
        if count > MAX_COUPLED_LFOS {
            return Err(rejected(ConfigError::TooManyOscillators {
                count,
                max: MAX_COUPLED_LFOS,
            }));
        }

        validate_coupling(coupling)?;

        for lfo in self.lfos.iter_mut() {
            lfo.reset();
        }

        self.count = count;
        self.coupling = coupling;

        log::debug!("Coupled LFO group initialized: count={count} coupling={coupling}");

        Ok(())
    }

    pub fn set_coupling(&mut self, coupling: f32) -> Result<(), ConfigError> {
        validate_coupling(coupling)?;
        self.coupling = coupling;

        log::debug!("Coupled LFO group coupling set to {coupling}");

        Ok(())
    }

    /// Sets the natural rate of one member in Hz.
    pub fn set_frequency(&mut self, index: usize, frequency: f32) -> Result<(), ConfigError> {
        self.validate_index(index)?;
        validate_frequency(frequency)?;

        self.lfos[index].set_frequency(frequency);

        log::debug!(
            "Coupled LFO {index} set to {frequency} Hz (step {})",
            self.lfos[index].step()
        );

        Ok(())
    }

    /// Sets the natural rate of one member as a period in milliseconds.
    pub fn set_period_ms(&mut self, index: usize, ms: f32) -> Result<(), ConfigError> {
        self.validate_index(index)?;

        if !ms.is_finite() || ms <= 2.0 * 1000.0 / SAMPLE_RATE {
            return Err(rejected(ConfigError::InvalidPeriod(ms)));
        }

        self.lfos[index].set_period_ms(ms);

        log::debug!(
            "Coupled LFO {index} set to {ms} ms (step {})",
            self.lfos[index].step()
        );

        Ok(())
    }

    pub fn set_phase(&mut self, index: usize, phase: u32) -> Result<(), ConfigError> {
        self.validate_index(index)?;
        self.lfos[index].set_phase(phase);

        Ok(())
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn coupling(&self) -> f32 {
        self.coupling
    }

    /// Active members in index order.
    #[inline]
    pub fn lfos(&self) -> &[Lfo] {
        &self.lfos[..self.count]
    }

    #[inline]
    pub fn lfo(&self, index: usize) -> Option<&Lfo> {
        self.lfos().get(index)
    }

    /// Advances member `index` by one sample and returns its waveform.
    ///
    /// `index` must be below [`count`](Self::count). This is only checked in
    /// debug builds; release builds step an inactive member instead.
    ///
    /// Call once per sample for every member. Members are updated one after
    /// the other, so a member sees the already advanced phases of the members
    /// stepped before it in the same sample.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, index: usize, shape: LfoShape) -> f32 {
        debug_assert!(index < self.count);

        if self.coupling > 0.0 && self.count > 1 {
            let phase = self.lfos[index].phase();
            let mut sum: f32 = 0.0;

            for (j, other) in self.lfos[..self.count].iter().enumerate() {
                if j != index {
                    sum += phase_sin(other.phase().wrapping_sub(phase));
                }
            }

            let adjustment = self.coupling * sum / self.count as f32;
            let lfo = &mut self.lfos[index];
            lfo.nudge((adjustment * lfo.step() as f32) as i32);
        }

        self.lfos[index].next(shape)
    }

    /// Advances every active member by one sample, writing member `i` to
    /// `out[i]`. Returns the number of values written.
    #[inline]
    pub fn next_all(&mut self, shape: LfoShape, out: &mut [f32]) -> usize {
        let count = self.count.min(out.len());

        for (index, out_sample) in out[..count].iter_mut().enumerate() {
            *out_sample = self.next(index, shape);
        }

        count
    }

    /// Phase coherence of the group in `0.0..=1.0`.
    ///
    /// An empty group has no coherence and returns exactly 0.
    #[inline]
    pub fn order_parameter(&self) -> f32 {
        self.mean_field().r
    }

    /// Magnitude and phase of the mean of all members on the unit circle.
    pub fn mean_field(&self) -> OrderParameter {
        if self.count == 0 {
            return OrderParameter::default();
        }

        let mut cs: f32 = 0.0;
        let mut sn: f32 = 0.0;

        for lfo in self.lfos() {
            cs += phase_cos(lfo.phase());
            sn += phase_sin(lfo.phase());
        }

        cs /= self.count as f32;
        sn /= self.count as f32;

        OrderParameter {
            r: (cs * cs + sn * sn).sqrt().min(1.0),
            mean_phase: radians_to_phase(sn.atan2(cs) as f64),
        }
    }

    fn validate_index(&self, index: usize) -> Result<(), ConfigError> {
        if index >= self.count {
            return Err(rejected(ConfigError::IndexOutOfRange {
                index,
                count: self.count,
            }));
        }

        Ok(())
    }
}

/// Accepts any finite coupling strength.
pub fn validate_coupling(coupling: f32) -> Result<(), ConfigError> {
    if !coupling.is_finite() {
        return Err(rejected(ConfigError::InvalidCoupling(coupling)));
    }

    Ok(())
}

/// Accepts rates above 0 Hz and below Nyquist.
pub fn validate_frequency(frequency: f32) -> Result<(), ConfigError> {
    if !frequency.is_finite() || frequency <= 0.0 || frequency >= SAMPLE_RATE * 0.5 {
        return Err(rejected(ConfigError::InvalidFrequency(frequency)));
    }

    Ok(())
}

/// Accepts finite values of a normalized effect parameter.
pub(crate) fn validate_parameter(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(rejected(ConfigError::InvalidParameter { name, value }));
    }

    Ok(())
}

fn rejected(error: ConfigError) -> ConfigError {
    log::warn!("Coupled LFO configuration rejected: {error}");
    error
}
