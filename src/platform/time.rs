//! Frame timing

/// Turns frame timestamps into clamped simulation steps.
///
/// Large gaps (a backgrounded tab, a debugger pause) are cut down to
/// `max_dt` so a single step never blows up the integration.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous frame, clamped to `[0, max_dt]`.
    /// The first frame yields 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, self.max_dt)
    }

    /// Forget the previous timestamp (e.g. after the loop was suspended)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new(0.04);
        assert_eq!(clock.advance(1234.0), 0.0);
        assert!((clock.advance(1250.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_pause_is_clamped() {
        let mut clock = FrameClock::new(0.04);
        clock.advance(0.0);
        assert_eq!(clock.advance(5000.0), 0.04);
    }

    #[test]
    fn test_time_going_backwards() {
        let mut clock = FrameClock::new(0.04);
        clock.advance(100.0);
        assert_eq!(clock.advance(50.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new(0.04);
        clock.advance(0.0);
        clock.reset();
        assert_eq!(clock.advance(3000.0), 0.0);
    }
}
