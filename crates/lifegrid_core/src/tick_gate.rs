//! Frame-count gate for generation updates
//!
//! The render loop runs at a fixed frame rate; the gate decides on which of
//! those frames a generation is advanced. A threshold of `T` fires once every
//! `T` ticks.

/// Lowest allowed threshold
pub const MIN_TICK_THRESHOLD: u32 = 1;

/// Result of ticking the gate once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep accumulating frames
    Hold,
    /// Advance one generation now
    Fire,
}

/// Counts frames and fires every `threshold` of them
#[derive(Debug, Clone)]
pub struct TickGate {
    threshold: u32,
    counter: u32,
}

impl TickGate {
    /// Create a gate firing every `threshold` ticks (clamped to at least 1)
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(MIN_TICK_THRESHOLD),
            counter: 0,
        }
    }

    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Frames accumulated since the last fire
    #[inline]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Count one frame
    pub fn tick(&mut self) -> TickOutcome {
        self.counter += 1;
        if self.counter >= self.threshold {
            self.counter = 0;
            TickOutcome::Fire
        } else {
            TickOutcome::Hold
        }
    }

    /// Slow the simulation down by one frame per generation
    pub fn increase(&mut self) -> bool {
        self.adjust(1)
    }

    /// Speed the simulation up by one frame per generation
    ///
    /// Returns `false` without changing anything at the floor.
    pub fn decrease(&mut self) -> bool {
        self.adjust(-1)
    }

    /// Add `delta` to the threshold unless the result would drop below the floor
    pub fn adjust(&mut self, delta: i64) -> bool {
        let next = self.threshold as i64 + delta;
        if next < MIN_TICK_THRESHOLD as i64 || next > u32::MAX as i64 {
            return false;
        }
        self.threshold = next as u32;
        true
    }

    /// Replace the threshold, clamped to at least 1
    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold.max(MIN_TICK_THRESHOLD);
    }

    /// Drop accumulated frames
    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_threshold_ticks() {
        let mut gate = TickGate::new(3);
        let outcomes: Vec<_> = (0..9).map(|_| gate.tick()).collect();
        let fires: Vec<usize> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| **o == TickOutcome::Fire)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(fires, vec![2, 5, 8]);
        assert_eq!(gate.counter(), 0);
    }

    #[test]
    fn test_threshold_one_fires_every_tick() {
        let mut gate = TickGate::new(1);
        for _ in 0..5 {
            assert_eq!(gate.tick(), TickOutcome::Fire);
        }
    }

    #[test]
    fn test_zero_threshold_clamped() {
        assert_eq!(TickGate::new(0).threshold(), 1);
        let mut gate = TickGate::new(5);
        gate.set_threshold(0);
        assert_eq!(gate.threshold(), 1);
    }

    #[test]
    fn test_decrease_has_floor() {
        let mut gate = TickGate::new(3);
        assert!(gate.decrease());
        assert!(gate.decrease());
        for _ in 0..10 {
            assert!(!gate.decrease());
        }
        assert_eq!(gate.threshold(), 1);
    }

    #[test]
    fn test_increase() {
        let mut gate = TickGate::new(60);
        assert!(gate.increase());
        assert_eq!(gate.threshold(), 61);
    }

    #[test]
    fn test_lowering_threshold_below_counter_fires_next_tick() {
        let mut gate = TickGate::new(10);
        for _ in 0..5 {
            gate.tick();
        }
        gate.set_threshold(2);
        assert_eq!(gate.tick(), TickOutcome::Fire);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(TickGate::default().threshold(), 60);
    }
}
