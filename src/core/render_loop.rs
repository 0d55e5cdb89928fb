/// Registration token for the repeating per-frame task.
///
/// At most one exists per scene session; it is created running and `stop`
/// is the only control operation. The token does not schedule anything
/// itself — the host forwards display-refresh ticks for as long as the
/// token is active, and a deterministic tick source can stand in for the
/// display in tests.
#[derive(Debug)]
pub struct RenderLoop {
    active: bool,
    frames: u64,
}

impl RenderLoop {
    /// Create an active loop with no frames behind it
    pub fn new() -> Self {
        Self {
            active: true,
            frames: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frames produced since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Record one produced frame
    pub fn advance(&mut self) {
        self.frames += 1;
    }

    /// Halt the loop. There is no way back; a new activation builds a new
    /// token.
    pub fn stop(&mut self) {
        self.active = false;
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Finite, deterministic stand-in for the display-refresh signal.
/// Yields tick indices `0..count`.
#[derive(Debug, Clone, Copy)]
pub struct FixedTicks {
    next: u64,
    count: u64,
}

impl FixedTicks {
    pub fn new(count: u64) -> Self {
        Self { next: 0, count }
    }
}

impl Iterator for FixedTicks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.count {
            return None;
        }
        let tick = self.next;
        self.next += 1;
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_starts_active_with_zero_frames() {
        let render_loop = RenderLoop::new();
        assert!(render_loop.is_active());
        assert_eq!(render_loop.frames(), 0);
    }

    #[test]
    fn advance_counts_frames() {
        let mut render_loop = RenderLoop::new();
        render_loop.advance();
        render_loop.advance();
        assert_eq!(render_loop.frames(), 2);
    }

    #[test]
    fn stop_is_terminal() {
        let mut render_loop = RenderLoop::new();
        render_loop.stop();
        assert!(!render_loop.is_active());

        // Frame bookkeeping survives the stop
        assert_eq!(render_loop.frames(), 0);
    }

    #[test]
    fn fixed_ticks_yields_exactly_count_items() {
        let ticks: Vec<u64> = FixedTicks::new(4).collect();
        assert_eq!(ticks, vec![0, 1, 2, 3]);

        let none: Vec<u64> = FixedTicks::new(0).collect();
        assert!(none.is_empty());
    }
}
