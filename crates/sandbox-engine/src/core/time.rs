/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of fixed simulation ticks,
/// so integration only ever sees `1 / tick_rate`.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Seconds per tick.
    dt: f64,
    /// Unspent frame time carried into the next frame.
    accumulator: f64,
    /// Cap on ticks per frame (spiral-of-death guard).
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(tick_rate: f64, max_steps: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let cap = self.dt * f64::from(self.max_steps);
        if self.accumulator > cap {
            log::warn!(
                "frame of {:.4}s exceeds {} fixed steps, dropping {:.4}s",
                frame_dt,
                self.max_steps,
                self.accumulator - cap
            );
            self.accumulator = cap;
        }
        // Tolerate rounding so a frame of exactly one tick yields one step.
        let steps = ((self.accumulator / self.dt) + 1e-9).floor() as u32;
        self.accumulator = (self.accumulator - f64::from(steps) * self.dt).max(0.0);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(120.0, 10);
        let steps = ts.accumulate(1.0 / 120.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(60.0, 10);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_max_steps() {
        let mut ts = FixedTimestep::new(120.0, 10);
        let steps = ts.accumulate(1.0); // 120 ticks worth, capped
        assert_eq!(steps, 10);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(120.0, 10);
        assert_eq!(ts.accumulate(-1.0), 0);
        // Nothing was borrowed against the next frame.
        assert_eq!(ts.accumulate(1.0 / 120.0), 1);
    }
}
