#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod fx;
pub mod oscillator;
pub mod resources;
pub mod utils;

/// Sample rate in Hz shared by all oscillators and effects.
pub const SAMPLE_RATE: f32 = 48000.0;

/// Number of samples per millisecond at [`SAMPLE_RATE`].
pub const SAMPLES_PER_MSEC: f32 = SAMPLE_RATE / 1000.0;
