//! Gesture debouncer - dwell-time confirmation of per-frame labels
//!
//! A label is confirmed only after it has been reported on consecutive
//! frames for longer than the dwell threshold. Any change restarts the
//! timer; losing the label (None) drops back to idle.
//!
//! In `FireMode::Repeat` a confirmed label fires on every qualifying frame
//! while held, so consumers must be rate-aware. `FireMode::Once` fires once
//! per hold instead.

use crate::classifier::GestureLabel;
use crate::config::{FireMode, GestureParams};
use super::state::DebounceState;

/// Callback receiving each confirmed gesture
type ConfirmedCallback = Box<dyn FnMut(GestureLabel)>;

pub struct GestureDebouncer {
    params: GestureParams,
    state: DebounceState,
    on_confirmed: Option<ConfirmedCallback>,
}

impl GestureDebouncer {
    pub fn new() -> Self {
        Self::with_params(GestureParams::default())
    }

    pub fn with_params(params: GestureParams) -> Self {
        Self {
            params,
            state: DebounceState::new(),
            on_confirmed: None,
        }
    }

    /// Register the confirmed-gesture callback, replacing any previous one
    pub fn on_confirmed<F>(&mut self, callback: F)
    where
        F: FnMut(GestureLabel) + 'static,
    {
        self.on_confirmed = Some(Box::new(callback));
    }

    /// Feed one frame's label.
    ///
    /// - `label`: classifier output for this frame (None = nothing recognized)
    /// - `now`: timestamp in ms
    /// Returns the confirmed gesture, if this frame confirms one
    pub fn update(&mut self, label: Option<GestureLabel>, now: f64) -> Option<GestureLabel> {
        let Some(label) = label else {
            self.state.clear();
            return None;
        };

        if self.state.current != Some(label) {
            self.state.restart(label, now);
            return None;
        }

        if self.state.held_for(now) <= self.params.dwell_ms {
            return None;
        }

        if self.params.fire_mode == FireMode::Once && self.state.fired {
            return None;
        }
        self.state.fired = true;

        if let Some(callback) = self.on_confirmed.as_mut() {
            callback(label);
        }
        Some(label)
    }

    /// Forget the current hold (e.g. tracking re-initialized)
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Change dwell / fire mode. The current hold keeps its start time.
    pub fn set_params(&mut self, params: GestureParams) {
        self.params = params;
    }

    pub fn params(&self) -> GestureParams {
        self.params
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
