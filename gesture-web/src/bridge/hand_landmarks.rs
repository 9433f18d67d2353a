//! Hand landmark parsing and the per-frame JS entry point
//!
//! MediaPipe Hands delivers up to `num_hands` hands as one flat
//! Float32Array of (x, y, z) triples. Only the first hand is classified.

use wasm_bindgen::prelude::*;
use crate::config::{HAND_LANDMARK_COUNT, LANDMARK_STRIDE};
use super::gesture_integration::process_hand_frame;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Floats per hand in the flat array
pub const HAND_FLOATS: usize = HAND_LANDMARK_COUNT * LANDMARK_STRIDE;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One hand keypoint in normalized image coordinates. `z` is carried, not used.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// A single hand: exactly 21 landmarks in MediaPipe order
#[derive(Clone, Debug, PartialEq)]
pub struct HandFrame {
    pub landmarks: [HandLandmark; HAND_LANDMARK_COUNT],
}

impl HandFrame {
    pub fn new(landmarks: [HandLandmark; HAND_LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Parse the first hand out of a MediaPipe result.
    ///
    /// Returns `Ok(None)` when no hand was detected. The array must hold
    /// exactly `num_hands` hands; anything else is rejected rather than
    /// partially read.
    pub fn from_flat(flat_data: &[f32], num_hands: usize) -> Result<Option<Self>, FrameError> {
        let Some(expected) = num_hands.checked_mul(HAND_FLOATS) else {
            return Err(FrameError::InvalidHandCount(num_hands));
        };
        if flat_data.len() != expected {
            return Err(FrameError::InvalidLength {
                got: flat_data.len(),
                expected,
            });
        }
        if num_hands == 0 {
            return Ok(None);
        }

        let mut landmarks = [HandLandmark::default(); HAND_LANDMARK_COUNT];
        for (i, point) in flat_data[..HAND_FLOATS].chunks_exact(LANDMARK_STRIDE).enumerate() {
            landmarks[i] = HandLandmark {
                x: point[0],
                y: point[1],
                z: point[2],
            };
        }
        Ok(Some(Self { landmarks }))
    }
}

/// Malformed input from the detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    InvalidLength { got: usize, expected: usize },
    /// Hand count too large to describe any real buffer
    InvalidHandCount(usize),
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::InvalidLength { got, expected } => {
                write!(f, "Invalid hand landmark data length: {} (expected {})", got, expected)
            }
            FrameError::InvalidHandCount(n) => write!(f, "Invalid hand count: {}", n),
        }
    }
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from the MediaPipe `onResults` handler with
/// `num_hands * 63` floats, timestamped with `Date.now()`
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) {
    apply_hand_landmarks_at(flat_data, num_hands, js_sys::Date::now());
}

/// Same as `apply_hand_landmarks` with a caller-supplied timestamp (ms),
/// e.g. `performance.now()` for a monotonic clock.
/// Frames with a non-finite timestamp are dropped; tracking state is untouched.
#[wasm_bindgen]
pub fn apply_hand_landmarks_at(flat_data: &[f32], num_hands: usize, now_ms: f64) {
    if !now_ms.is_finite() {
        log::warn!("Invalid frame timestamp: {}; frame dropped", now_ms);
        return;
    }
    let frame = match HandFrame::from_flat(flat_data, num_hands) {
        Ok(frame) => frame,
        Err(err) => {
            log::warn!("{}; treating frame as no hand", err);
            None
        }
    };
    process_hand_frame(frame.as_ref(), now_ms);
}
