use std::time::Instant;

/// How often the measured frame rate is logged, seconds
const FPS_LOG_INTERVAL: f32 = 1.0;

/// Wall-clock frame timing for the windowed host: per-tick delta plus a
/// once-per-second frame-rate aggregate.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    window_frames: u32,
    window_elapsed: f32,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            window_frames: 0,
            window_elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Advance the clock by one frame and return the delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        self.window_frames += 1;
        self.window_elapsed += delta;
        if self.window_elapsed >= FPS_LOG_INTERVAL {
            self.fps = self.window_frames as f32 / self.window_elapsed;
            log::info!("fps: {:.1}", self.fps);
            self.window_frames = 0;
            self.window_elapsed = 0.0;
        }

        delta
    }

    /// Most recently aggregated frame rate; 0 until the first full interval
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009 && delta <= 0.050);
    }

    #[test]
    fn fps_stays_zero_before_the_first_interval() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert_eq!(clock.fps(), 0.0);
    }
}
