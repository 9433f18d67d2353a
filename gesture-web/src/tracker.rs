//! Gesture tracker - one frame through classify, debounce and status
//!
//! Owns the debouncer and the status observers. Knows nothing about JS;
//! the bridge feeds it parsed frames and timestamps.

use crate::bridge::HandFrame;
use crate::classifier::{classify, GestureLabel};
use crate::config::GestureParams;
use crate::debounce::GestureDebouncer;
use crate::status::{FrameStatus, HandStatus, StatusObserver};

pub struct GestureTracker {
    debouncer: GestureDebouncer,
    observers: Vec<Box<dyn StatusObserver>>,
    last_hand: HandStatus,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::with_params(GestureParams::default())
    }

    pub fn with_params(params: GestureParams) -> Self {
        Self {
            debouncer: GestureDebouncer::with_params(params),
            observers: Vec::new(),
            last_hand: HandStatus::NotDetected,
        }
    }

    /// Register a confirmed-gesture callback (replaces any previous one)
    pub fn on_gesture<F>(&mut self, callback: F)
    where
        F: FnMut(GestureLabel) + 'static,
    {
        self.debouncer.on_confirmed(callback);
    }

    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: StatusObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Process one detector result.
    ///
    /// - `frame`: the first hand, or None when no hand was detected
    /// - `now`: timestamp in ms
    /// Returns the gesture confirmed on this frame, if any
    pub fn process(&mut self, frame: Option<&HandFrame>, now: f64) -> Option<GestureLabel> {
        let status = match frame {
            Some(hand) => FrameStatus::detected(classify(&hand.landmarks)),
            None => FrameStatus::not_detected(),
        };

        if status.hand != self.last_hand {
            match status.hand {
                HandStatus::Detected => log::info!("🖐️ Hand detected"),
                HandStatus::NotDetected => log::info!("Hand lost"),
            }
            self.last_hand = status.hand;
        }

        // Losing the hand feeds None, which drops any hold in progress
        let confirmed = self.debouncer.update(status.gesture, now);
        if let Some(label) = confirmed {
            log::debug!("Gesture confirmed: {} ({})", label, label.hand_shape());
        }

        for observer in self.observers.iter_mut() {
            observer.on_frame(&status);
        }

        confirmed
    }

    /// Drop the current hold
    pub fn reset(&mut self) {
        self.debouncer.reset();
    }

    pub fn set_params(&mut self, params: GestureParams) {
        self.debouncer.set_params(params);
    }

    pub fn debouncer(&self) -> &GestureDebouncer {
        &self.debouncer
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
