//! Debounce state - what the debouncer remembers between frames

use crate::classifier::GestureLabel;

/// Coarse state machine position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No label being held
    Idle,
    /// A label is being held; timer running since `started_at`
    Holding(GestureLabel),
}

/// Mutable state owned by `GestureDebouncer`
#[derive(Clone, Debug, PartialEq)]
pub struct DebounceState {
    /// Label seen on the last frame (None = idle)
    pub current: Option<GestureLabel>,
    /// When `current` first appeared continuously (ms)
    pub started_at: f64,
    /// Whether this hold already fired (only consulted in `FireMode::Once`)
    pub fired: bool,
}

impl DebounceState {
    pub fn new() -> Self {
        Self {
            current: None,
            started_at: 0.0,
            fired: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.current {
            Some(label) => Phase::Holding(label),
            None => Phase::Idle,
        }
    }

    /// Start holding `label` from `now`
    pub fn restart(&mut self, label: GestureLabel, now: f64) {
        self.current = Some(label);
        self.started_at = now;
        self.fired = false;
    }

    /// Back to idle
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Time `current` has been held. Never negative, so a clock stepping
    /// backwards cannot satisfy the dwell early.
    pub fn held_for(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }
}

impl Default for DebounceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = DebounceState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.started_at, 0.0);
    }

    #[test]
    fn test_restart_and_clear() {
        let mut state = DebounceState::new();
        state.restart(GestureLabel::Left, 1200.0);
        state.fired = true;
        assert_eq!(state.phase(), Phase::Holding(GestureLabel::Left));

        state.restart(GestureLabel::Right, 1300.0);
        assert!(!state.fired);
        assert_eq!(state.started_at, 1300.0);

        state.clear();
        assert_eq!(state, DebounceState::default());
    }

    #[test]
    fn test_held_for_clamps_backwards_clock() {
        let mut state = DebounceState::new();
        state.restart(GestureLabel::Rotate, 5000.0);
        assert_eq!(state.held_for(5250.0), 250.0);
        assert_eq!(state.held_for(4000.0), 0.0);
    }
}
