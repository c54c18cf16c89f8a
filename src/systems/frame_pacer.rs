//! Frame pacing
//!
//! Caps the main loop at a target frame rate by handing the event loop a
//! `WaitUntil` deadline. Generation speed is set separately by the tick gate.

use std::time::{Duration, Instant};

/// Tracks when the next frame is due
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    /// Create a pacer for `target_fps` frames per second, first frame due now
    ///
    /// A zero rate is treated as one frame per second.
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a pacer whose first frame is due at `start`
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        let fps = target_fps.max(1);
        Self {
            frame_interval: Duration::from_secs(1) / fps,
            next_frame: start,
        }
    }

    /// Time between frames
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Deadline for the next frame
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Whether a frame is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record a frame started at `now` and schedule the next one
    ///
    /// A loop that fell more than one interval behind restarts from `now`
    /// instead of bursting to catch up.
    pub fn frame_started(&mut self, now: Instant) {
        self.next_frame += self.frame_interval;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_fps() {
        let pacer = FramePacer::new(1000);
        assert_eq!(pacer.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_zero_fps_clamped() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_first_frame_due_immediately() {
        let start = Instant::now();
        let pacer = FramePacer::starting_at(60, start);
        assert!(pacer.is_due(start));
    }

    #[test]
    fn test_schedules_one_interval_ahead() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(100, start);

        pacer.frame_started(start);
        assert_eq!(pacer.next_frame(), start + Duration::from_millis(10));
        assert!(!pacer.is_due(start + Duration::from_millis(5)));
        assert!(pacer.is_due(start + Duration::from_millis(10)));
    }

    #[test]
    fn test_keeps_cadence_when_slightly_late() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(100, start);
        pacer.frame_started(start);

        // Woke 2ms late; next deadline stays on the 10ms grid
        pacer.frame_started(start + Duration::from_millis(12));
        assert_eq!(pacer.next_frame(), start + Duration::from_millis(20));
    }

    #[test]
    fn test_no_burst_after_stall() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(100, start);
        pacer.frame_started(start);

        let late = start + Duration::from_millis(500);
        pacer.frame_started(late);
        assert_eq!(pacer.next_frame(), late + Duration::from_millis(10));
    }
}
