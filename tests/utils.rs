//! Tests for the numeric helpers

use coupled_lfo_dsp::utils::delay_line::DelayLine;
use coupled_lfo_dsp::utils::*;

#[test]
fn fraction_conversions() {
    assert_eq!(u32_to_fraction(0), 0.0);
    assert_eq!(u32_to_fraction(QUARTER_TURN), 0.25);
    assert_eq!(u32_to_fraction(1 << 31), 0.5);

    assert_eq!(fraction_to_phase(0.25), QUARTER_TURN);
    assert_eq!(fraction_to_phase(1.25), QUARTER_TURN);
    assert_eq!(fraction_to_phase(-0.75), QUARTER_TURN);
    assert_eq!(fraction_to_phase(0.0), 0);
}

#[test]
fn control_mapping() {
    assert_eq!(linear(0.0, 0.5, 15.0), 0.5);
    assert_eq!(linear(1.0, 0.5, 15.0), 15.0);
    assert_eq!(crossfade(2.0, 4.0, 0.5), 3.0);
}

#[test]
fn delay_line_integer_and_fractional_reads() {
    let mut line = DelayLine::<16>::new();

    for sample in 1..=8 {
        line.write(sample as f32);
    }

    assert_eq!(line.max_delay(), 16);
    assert_eq!(line.read(1), 8.0);
    assert_eq!(line.read(3), 6.0);
    assert_eq!(line.read_frac(2.5), 6.5);

    // Reads are clamped to at least one sample of delay.
    assert_eq!(line.read_frac(0.0), 8.0);

    line.reset();
    assert_eq!(line.read(1), 0.0);
}
