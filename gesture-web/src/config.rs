//! Tracker configuration
//!
//! Fixed geometric thresholds, tunable debounce parameters, and the
//! MediaPipe options the JS host should construct `Hands` with.

use wasm_bindgen::prelude::*;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Landmarks per hand (MediaPipe Hands)
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Floats per landmark in the flat array (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

/// Horizontal thumb tip offset (normalized) above which the thumb is extended
pub const THUMB_EXTENSION_THRESHOLD: f32 = 0.1;

/// How far (normalized) a fingertip must sit above its knuckle to count as extended
pub const FINGER_EXTENSION_MARGIN: f32 = 0.05;

// ============================================================================
// DEBOUNCE
// ============================================================================

/// Minimum hold before a gesture is confirmed (ms)
pub const DEFAULT_DWELL_MS: f64 = 300.0;

/// When a held gesture fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FireMode {
    /// Fire on every frame once the dwell is satisfied
    #[default]
    Repeat,
    /// Fire once per hold; re-arm when the label changes or the hand is lost
    Once,
}

/// Errors from invalid debounce parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    InvalidDwell(f64),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::InvalidDwell(ms) => {
                write!(f, "Dwell threshold must be a finite, non-negative number of ms (got {})", ms)
            }
        }
    }
}

impl From<ParamsError> for JsValue {
    fn from(err: ParamsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Runtime-tunable debounce parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureParams {
    pub dwell_ms: f64,
    pub fire_mode: FireMode,
}

impl GestureParams {
    pub fn new(dwell_ms: f64, fire_mode: FireMode) -> Result<Self, ParamsError> {
        if !dwell_ms.is_finite() || dwell_ms < 0.0 {
            return Err(ParamsError::InvalidDwell(dwell_ms));
        }
        Ok(Self { dwell_ms, fire_mode })
    }
}

impl Default for GestureParams {
    fn default() -> Self {
        Self {
            dwell_ms: DEFAULT_DWELL_MS,
            fire_mode: FireMode::Repeat,
        }
    }
}

// ============================================================================
// DETECTOR OPTIONS
// ============================================================================

/// Options for the external MediaPipe `Hands` detector and camera.
/// Read by JS via `get_detector_options()` so both sides agree on them.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorOptions {
    /// Only the first hand is ever classified
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub capture_width: u32,
    pub capture_height: u32,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            capture_width: 640,
            capture_height: 480,
        }
    }
}

#[wasm_bindgen]
pub fn get_detector_options() -> DetectorOptions {
    DetectorOptions::default()
}
