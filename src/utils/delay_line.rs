//! Delay line with fractional read-out.

#[derive(Debug, Clone)]
pub struct DelayLine<const MAX_DELAY: usize> {
    write_ptr: usize,
    line: [f32; MAX_DELAY],
}

impl<const MAX_DELAY: usize> Default for DelayLine<MAX_DELAY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_DELAY: usize> DelayLine<MAX_DELAY> {
    pub fn new() -> Self {
        Self {
            write_ptr: 0,
            line: [0.0; MAX_DELAY],
        }
    }

    pub fn reset(&mut self) {
        self.line.fill(0.0);
        self.write_ptr = 0;
    }

    pub fn max_delay(&self) -> usize {
        MAX_DELAY
    }

    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.line[self.write_ptr] = sample;
        self.write_ptr = (self.write_ptr + MAX_DELAY - 1) % MAX_DELAY;
    }

    /// Reads the sample written `delay` writes ago. A delay of 1 returns the
    /// most recent sample.
    #[inline]
    pub fn read(&self, delay: usize) -> f32 {
        self.line[(self.write_ptr + delay) % MAX_DELAY]
    }

    /// Linearly interpolated read. `delay` is clamped to `1.0..MAX_DELAY - 1`.
    #[inline]
    pub fn read_frac(&self, delay: f32) -> f32 {
        let delay = delay.clamp(1.0, (MAX_DELAY - 2) as f32);
        let delay_integral = delay as usize;
        let delay_fractional = delay - (delay_integral as f32);
        let a = self.read(delay_integral);
        let b = self.read(delay_integral + 1);

        a + (b - a) * delay_fractional
    }
}
