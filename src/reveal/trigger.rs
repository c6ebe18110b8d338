//! One-shot latch for a section's entrance animation.
//!
//! A trigger is armed when the section mounts, fires at most once (unless
//! replay is requested) when the section's top edge crosses the viewport
//! threshold, and is disposed on unmount. Illegal transitions are no-ops.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Armed,
    Fired,
    Disposed,
}

/// True once the root's top edge has scrolled up to `threshold` of the
/// viewport height. 0.8 means "fire when the top reaches 80% down the
/// viewport", i.e. the section is just entering from the bottom.
pub fn crossed(root_top: f64, viewport_height: f64, threshold: f64) -> bool {
    root_top <= viewport_height * threshold
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    phase: Phase,
    threshold: f64,
    fire_once: bool,
}

impl RevealTrigger {
    pub fn new(threshold: f64, fire_once: bool) -> Self {
        Self {
            phase: Phase::Pending,
            threshold,
            fire_once,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pending -> Armed. Returns false from any other phase.
    pub fn arm(&mut self) -> bool {
        if self.phase == Phase::Pending {
            self.phase = Phase::Armed;
            true
        } else {
            false
        }
    }

    pub fn should_fire(&self, root_top: f64, viewport_height: f64) -> bool {
        let in_range = crossed(root_top, viewport_height, self.threshold);
        match self.phase {
            Phase::Armed => in_range,
            Phase::Fired if !self.fire_once => in_range,
            _ => false,
        }
    }

    /// Latches into Fired. Returns whether the timeline should play.
    pub fn fire(&mut self) -> bool {
        match self.phase {
            Phase::Armed => {
                self.phase = Phase::Fired;
                true
            }
            Phase::Fired if !self.fire_once => true,
            _ => false,
        }
    }

    /// Terminal, idempotent. After this nothing fires, even if a stale
    /// scroll event still crosses the threshold.
    pub fn dispose(&mut self) {
        self.phase = Phase::Disposed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_math_matches_top_80_percent() {
        // viewport 1000px, threshold 0.8: fire at or above 800px
        assert!(!crossed(900.0, 1000.0, 0.8));
        assert!(crossed(800.0, 1000.0, 0.8));
        assert!(crossed(-50.0, 1000.0, 0.8));
    }

    #[test]
    fn fires_exactly_once_regardless_of_repeat_crossings() {
        let mut trigger = RevealTrigger::new(0.8, true);
        assert!(trigger.arm());
        assert!(trigger.should_fire(100.0, 1000.0));
        assert!(trigger.fire());
        assert_eq!(trigger.phase(), Phase::Fired);
        // scrolled away and back in
        assert!(!trigger.should_fire(100.0, 1000.0));
        assert!(!trigger.fire());
    }

    #[test]
    fn replay_allowed_when_fire_once_is_off() {
        let mut trigger = RevealTrigger::new(0.8, false);
        trigger.arm();
        assert!(trigger.fire());
        assert!(trigger.should_fire(100.0, 1000.0));
        assert!(trigger.fire());
    }

    #[test]
    fn pending_trigger_never_fires() {
        let mut trigger = RevealTrigger::new(0.8, true);
        assert!(!trigger.should_fire(0.0, 1000.0));
        assert!(!trigger.fire());
        assert_eq!(trigger.phase(), Phase::Pending);
    }

    #[test]
    fn dispose_is_idempotent_and_final() {
        let mut trigger = RevealTrigger::new(0.8, true);
        trigger.arm();
        trigger.dispose();
        trigger.dispose();
        assert_eq!(trigger.phase(), Phase::Disposed);
        // a stale scroll event crossing the threshold after disposal
        assert!(!trigger.should_fire(0.0, 1000.0));
        assert!(!trigger.fire());
        assert!(!trigger.arm());
    }

    #[test]
    fn dispose_before_arming_blocks_the_whole_lifecycle() {
        let mut trigger = RevealTrigger::new(0.8, true);
        trigger.dispose();
        assert!(!trigger.arm());
        assert!(!trigger.fire());
    }
}
