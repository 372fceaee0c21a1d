/// Generation counter plus frame pacing for the scheduler
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    generation: u64,
    frame_interval_ms: f64,
    max_generations: u64,
    last_frame_ms: f64,
}

impl FrameClock {
    pub fn new(frame_interval_ms: f64, max_generations: u64) -> Self {
        Self {
            generation: 0,
            frame_interval_ms,
            max_generations,
            last_frame_ms: 0.0,
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 { self.generation }

    #[inline]
    pub fn frame_interval_ms(&self) -> f64 { self.frame_interval_ms }

    #[inline]
    pub fn max_generations(&self) -> u64 { self.max_generations }

    #[inline]
    pub fn last_frame_ms(&self) -> f64 { self.last_frame_ms }

    pub(crate) fn set_frame_interval_ms(&mut self, ms: f64) {
        self.frame_interval_ms = ms;
    }

    pub(crate) fn set_max_generations(&mut self, max: u64) {
        self.max_generations = max;
    }

    #[inline]
    pub fn cap_reached(&self) -> bool {
        self.generation >= self.max_generations
    }

    /// Restart pacing from `now`
    pub(crate) fn restart(&mut self, now: f64) {
        self.last_frame_ms = now;
    }

    /// True once at least one interval has elapsed since the last frame
    #[inline]
    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_frame_ms >= self.frame_interval_ms
    }

    /// Move the frame reference forward, keeping the cadence remainder so a
    /// late tick does not push every later frame back.
    pub(crate) fn mark_frame(&mut self, now: f64) {
        let elapsed = now - self.last_frame_ms;
        self.last_frame_ms = if self.frame_interval_ms > 0.0 {
            now - elapsed % self.frame_interval_ms
        } else {
            now
        };
    }

    pub(crate) fn advance(&mut self) {
        self.generation += 1;
    }

    pub(crate) fn reset_generation(&mut self) {
        self.generation = 0;
    }
}
