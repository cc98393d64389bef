//! Completion gate and reset timer.
//!
//! Tracks when all twelve actors have frozen, latches the hold start
//! the first frame that happens, and signals the reset strictly after
//! the hold expires.

use super::actor::Actor;
use super::constants::HOLD_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Running,
    Holding,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionGate {
    /// Clock reading of the first all-complete frame, captured once.
    hold_start: Option<f64>,
}

impl CompletionGate {
    pub fn new() -> Self {
        Self { hold_start: None }
    }

    pub fn phase(&self) -> GatePhase {
        if self.hold_start.is_some() {
            GatePhase::Holding
        } else {
            GatePhase::Running
        }
    }

    /// Fixed-id-order scan, short-circuiting on the first running actor.
    pub fn all_complete(actors: &[Actor]) -> bool {
        actors.iter().all(|a| a.completed)
    }

    /// Evaluates the gate for this frame; returns `true` when the hold
    /// has expired and the scene must reset now.
    pub fn update(&mut self, all_complete: bool, now_ms: f64) -> bool {
        if !all_complete {
            return false;
        }
        let start = *self.hold_start.get_or_insert(now_ms);
        now_ms - start > HOLD_MS
    }

    /// Reset path only.
    pub fn clear(&mut self) {
        self.hold_start = None;
    }
}

impl Default for CompletionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_running_while_any_actor_is_live() {
        let mut gate = CompletionGate::new();
        assert!(!gate.update(false, 1_000.0));
        assert_eq!(gate.phase(), GatePhase::Running);
        assert!(!gate.update(false, 100_000.0));
    }

    #[test]
    fn latches_hold_start_exactly_once() {
        let mut gate = CompletionGate::new();
        assert!(!gate.update(true, 1_000.0));
        assert_eq!(gate.phase(), GatePhase::Holding);
        // Later frames must not re-capture the start.
        assert!(!gate.update(true, 4_000.0));
        assert!(!gate.update(true, 6_000.0)); // exactly 5000 elapsed: not yet
        assert!(gate.update(true, 6_001.0));
    }

    #[test]
    fn never_resets_early() {
        let mut gate = CompletionGate::new();
        gate.update(true, 0.0);
        for now in [1.0, 2_500.0, 4_999.0, 5_000.0] {
            assert!(!gate.update(true, now), "reset fired at {now}");
        }
        assert!(gate.update(true, 5_000.1));
    }

    #[test]
    fn clear_returns_to_running() {
        let mut gate = CompletionGate::new();
        gate.update(true, 100.0);
        gate.clear();
        assert_eq!(gate.phase(), GatePhase::Running);
        assert_eq!(gate, CompletionGate::new());
    }
}
