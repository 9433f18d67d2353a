//! Per-finger extension predicates
//!
//! Thumb is measured sideways (it folds across the palm); the other four
//! fingers compare tip height against their knuckle. Image y grows downward,
//! so an extended fingertip has the smaller y.

use crate::bridge::{
    HandLandmark, THUMB_MCP, THUMB_TIP, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP,
    RING_MCP, RING_TIP, PINKY_MCP, PINKY_TIP,
};
use crate::config::{FINGER_EXTENSION_MARGIN, HAND_LANDMARK_COUNT, THUMB_EXTENSION_THRESHOLD};

/// Extension flags in finger order: thumb, index, middle, ring, pinky
pub type FingerExtension = [bool; 5];

/// (tip, knuckle) for the four non-thumb fingers
const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_MCP),
    (RING_TIP, RING_MCP),
    (PINKY_TIP, PINKY_MCP),
];

fn thumb_extended(landmarks: &[HandLandmark; HAND_LANDMARK_COUNT]) -> bool {
    (landmarks[THUMB_TIP].x - landmarks[THUMB_MCP].x).abs() > THUMB_EXTENSION_THRESHOLD
}

fn finger_extended(tip: HandLandmark, knuckle: HandLandmark) -> bool {
    tip.y < knuckle.y - FINGER_EXTENSION_MARGIN
}

/// Compute which fingers are extended in this frame
pub fn finger_extension(landmarks: &[HandLandmark; HAND_LANDMARK_COUNT]) -> FingerExtension {
    let mut extended = [false; 5];
    extended[0] = thumb_extended(landmarks);
    for (i, (tip, knuckle)) in FINGER_JOINTS.iter().enumerate() {
        extended[i + 1] = finger_extended(landmarks[*tip], landmarks[*knuckle]);
    }
    extended
}
