//! Quarter-wave sine table.
//!
//! Holds `sin(x)` for `x` in `0..=π/2`, sampled at [`QUARTER_SINE_SIZE`] intervals.
//! One guard sample is appended so that linear interpolation can always read
//! `table[idx + 1]` without a bounds special case.

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

pub const QUARTER_SINE_BITS: u32 = 8;
pub const QUARTER_SINE_SIZE: usize = 1 << QUARTER_SINE_BITS;

pub type QuarterSineTable = [f32; QUARTER_SINE_SIZE + 1];

static QUARTER_SINE: Once<QuarterSineTable> = Once::new();

/// Returns the shared table, computing it on first use.
#[inline]
pub fn quarter_sine() -> &'static QuarterSineTable {
    QUARTER_SINE.call_once(build)
}

fn build() -> QuarterSineTable {
    let mut table = [0.0; QUARTER_SINE_SIZE + 1];

    for (i, value) in table.iter_mut().enumerate() {
        let x = i as f64 / QUARTER_SINE_SIZE as f64 * core::f64::consts::FRAC_PI_2;
        *value = x.sin() as f32;
    }

    table
}
