//! Gesture integration - connects the tracker with JS
//!
//! Holds the thread-local tracker, forwards confirmed gestures to the JS
//! action dispatcher and serves the status readouts.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::classifier::GestureLabel;
use crate::config::{FireMode, GestureParams};
use crate::status::SharedStatus;
use crate::tracker::GestureTracker;
use super::hand_landmarks::HandFrame;

struct IntegrationState {
    tracker: GestureTracker,
    status: SharedStatus,
}

impl Default for IntegrationState {
    fn default() -> Self {
        let status = SharedStatus::new();
        let mut tracker = GestureTracker::new();
        tracker.add_observer(status.clone());
        tracker.on_gesture(|label| {
            PENDING.with(|pending| pending.borrow_mut().push(label));
        });
        Self { tracker, status }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static STATE: RefCell<IntegrationState> = RefCell::new(IntegrationState::default());

    /// Gestures confirmed during the current frame, delivered once STATE is released
    static PENDING: RefCell<Vec<GestureLabel>> = RefCell::new(Vec::new());

    /// JS action dispatcher
    static GESTURE_CALLBACK: RefCell<Option<js_sys::Function>> = RefCell::new(None);
}

/// Run one parsed frame through the tracker (called from apply_hand_landmarks)
pub fn process_hand_frame(frame: Option<&HandFrame>, now_ms: f64) {
    STATE.with(|state_cell| {
        state_cell.borrow_mut().tracker.process(frame, now_ms);
    });
    dispatch_pending();
}

/// Deliver queued gestures. Runs with no tracker borrow held, so the
/// callback may call back into this module.
fn dispatch_pending() {
    let confirmed: Vec<GestureLabel> = PENDING.with(|pending| pending.borrow_mut().drain(..).collect());
    if confirmed.is_empty() {
        return;
    }

    let Some(callback) = GESTURE_CALLBACK.with(|cb| cb.borrow().clone()) else {
        return;
    };
    for label in confirmed {
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(label.as_str())) {
            log::error!("Gesture callback threw: {:?}", err);
        }
    }
}

// ============================================================================
// WASM API
// ============================================================================

/// Register the function called with "right" | "left" | "rotate"
/// for every confirmed gesture. Replaces any previous callback.
#[wasm_bindgen]
pub fn on_gesture(callback: js_sys::Function) {
    GESTURE_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Update the dwell threshold (ms) and whether a held gesture fires once
/// or on every frame
#[wasm_bindgen]
pub fn set_gesture_params(dwell_ms: f64, fire_once: bool) -> Result<(), JsValue> {
    let fire_mode = if fire_once { FireMode::Once } else { FireMode::Repeat };
    let params = GestureParams::new(dwell_ms, fire_mode)?;
    STATE.with(|state_cell| {
        state_cell.borrow_mut().tracker.set_params(params);
    });
    log::info!("Gesture params: dwell {}ms, {:?}", dwell_ms, fire_mode);
    Ok(())
}

/// Forget the gesture being held (e.g. after the camera restarts)
#[wasm_bindgen]
pub fn reset_tracking() {
    STATE.with(|state_cell| {
        state_cell.borrow_mut().tracker.reset();
    });
    PENDING.with(|pending| pending.borrow_mut().clear());
}

/// "detected" | "not detected"
#[wasm_bindgen]
pub fn get_hand_status() -> String {
    STATE.with(|state_cell| state_cell.borrow().status.latest().hand.as_str().to_string())
}

/// Raw label of the last frame, or "-"
#[wasm_bindgen]
pub fn get_gesture_type() -> String {
    STATE.with(|state_cell| state_cell.borrow().status.latest().gesture_text().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{apply_hand_landmarks_at, HandLandmark, HAND_FLOATS};
    use crate::debounce::Phase;
    use crate::config::HAND_LANDMARK_COUNT;

    fn fist_frame() -> HandFrame {
        HandFrame::new([HandLandmark::new(0.5, 0.5); HAND_LANDMARK_COUNT])
    }

    // No JS callback is registered in native tests, so dispatch only drains.
    #[test]
    fn test_pending_queue_drained_per_frame() {
        let frame = fist_frame();
        process_hand_frame(Some(&frame), 0.0);
        process_hand_frame(Some(&frame), 301.0);
        assert!(PENDING.with(|p| p.borrow().is_empty()));
        assert_eq!(get_hand_status(), "detected");
        assert_eq!(get_gesture_type(), "rotate");

        process_hand_frame(None, 400.0);
        assert_eq!(get_hand_status(), "not detected");
        assert_eq!(get_gesture_type(), "-");
    }

    #[test]
    fn test_params_update() {
        assert!(set_gesture_params(150.0, true).is_ok());
        let params = STATE.with(|s| s.borrow().tracker.debouncer().params());
        assert_eq!(params.dwell_ms, 150.0);
        assert_eq!(params.fire_mode, FireMode::Once);

        reset_tracking();
        assert_eq!(current_phase(), Phase::Idle);
    }

    fn current_phase() -> Phase {
        STATE.with(|s| s.borrow().tracker.debouncer().state().phase())
    }

    #[test]
    fn test_short_array_counts_as_no_hand() {
        let fist = vec![0.5; HAND_FLOATS];
        apply_hand_landmarks_at(&fist, 1, 0.0);
        apply_hand_landmarks_at(&fist, 1, 250.0);
        assert_eq!(current_phase(), Phase::Holding(GestureLabel::Rotate));

        apply_hand_landmarks_at(&fist[..40], 1, 280.0);
        assert_eq!(get_hand_status(), "not detected");
        assert_eq!(current_phase(), Phase::Idle);

        // The fist has to earn the full dwell again from t=310
        apply_hand_landmarks_at(&fist, 1, 310.0);
        apply_hand_landmarks_at(&fist, 1, 400.0);
        assert_eq!(STATE.with(|s| s.borrow().tracker.debouncer().state().started_at), 310.0);
        assert_eq!(current_phase(), Phase::Holding(GestureLabel::Rotate));
    }

    #[test]
    fn test_huge_hand_count_counts_as_no_hand() {
        let fist = vec![0.5; HAND_FLOATS];
        apply_hand_landmarks_at(&fist, 1, 0.0);
        apply_hand_landmarks_at(&fist, usize::MAX, 100.0);
        assert_eq!(get_hand_status(), "not detected");
        assert_eq!(current_phase(), Phase::Idle);
    }

    #[test]
    fn test_non_finite_timestamp_dropped() {
        let fist = vec![0.5; HAND_FLOATS];
        apply_hand_landmarks_at(&fist, 1, 0.0);
        apply_hand_landmarks_at(&fist, 1, f64::NAN);
        apply_hand_landmarks_at(&fist, 1, f64::INFINITY);
        let started_at = STATE.with(|s| s.borrow().tracker.debouncer().state().started_at);
        assert_eq!(started_at, 0.0);

        // A NaN first frame must not poison the hold either
        reset_tracking();
        apply_hand_landmarks_at(&fist, 1, f64::NAN);
        assert_eq!(current_phase(), Phase::Idle);
        apply_hand_landmarks_at(&fist, 1, 1000.0);
        assert_eq!(current_phase(), Phase::Holding(GestureLabel::Rotate));
    }

    #[test]
    fn test_flat_frame_through_tracker() {
        let data = vec![0.5; HAND_FLOATS];
        let frame = HandFrame::from_flat(&data, 1).unwrap();
        process_hand_frame(frame.as_ref(), 0.0);
        assert_eq!(get_gesture_type(), "rotate");
    }
}
