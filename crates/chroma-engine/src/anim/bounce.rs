/// A scalar channel that steps by a fixed increment each frame and reverses
/// direction when it leaves `[0, 1]`.
///
/// Each channel keeps its own step, so channels with different speeds bounce
/// independently. The value may overshoot the band by at most one step before
/// the reversal takes effect; consumers that need a hard bound should clamp
/// (see `paint::Color::clamped`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BounceChannel {
    value: f32,
    step: f32,
}

impl BounceChannel {
    /// Creates a channel starting at `value`, moving by `step` per tick.
    ///
    /// A zero `step` is allowed and yields a frozen channel: `tick` returns
    /// `value` unchanged forever.
    pub fn new(value: f32, step: f32) -> Self {
        Self { value, step }
    }

    /// Returns the current value without advancing.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advances the channel by one frame and returns the new value.
    ///
    /// The reversal check runs before the step, so a value pushed past a
    /// bound on the previous tick turns around on this one.
    pub fn tick(&mut self) -> f32 {
        if self.value > 1.0 {
            self.step = -self.step.abs();
        } else if self.value < 0.0 {
            self.step = self.step.abs();
        }
        self.value += self.step;
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_forward_inside_band() {
        let mut c = BounceChannel::new(0.5, 0.1);
        assert!((c.tick() - 0.6).abs() < 1e-6);
        assert!((c.tick() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn reverses_above_one() {
        let mut c = BounceChannel::new(0.95, 0.1);
        assert!(c.tick() > 1.0); // 1.05, past the bound
        assert!(c.tick() < 1.0); // reversal kicks in
    }

    #[test]
    fn reverses_below_zero() {
        let mut c = BounceChannel::new(0.05, -0.1);
        assert!(c.tick() < 0.0); // -0.05
        assert!(c.tick() > 0.0); // back inside
    }

    #[test]
    fn step_magnitude_preserved_per_channel() {
        let mut c = BounceChannel::new(1.2, 0.15);
        let before = c.value();
        let after = c.tick();
        assert!((before - after - 0.15).abs() < 1e-6);
    }

    #[test]
    fn zero_step_freezes_channel() {
        let mut c = BounceChannel::new(0.4, 0.0);
        for _ in 0..10 {
            assert_eq!(c.tick(), 0.4);
        }
    }

    #[test]
    fn stays_near_band_over_many_ticks() {
        let mut c = BounceChannel::new(0.3, 0.2);
        for _ in 0..1000 {
            let v = c.tick();
            assert!((-0.2..=1.2).contains(&v), "escaped band: {v}");
        }
    }
}
