//! Gesture Web - hand gesture controls from MediaPipe landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations and re-exports
//! - Console logging and wasm_bindgen start hook

mod bridge;
mod classifier;
mod config;
mod debounce;
mod status;
mod tracker;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    apply_hand_landmarks, apply_hand_landmarks_at,
    on_gesture, set_gesture_params, reset_tracking,
    get_hand_status, get_gesture_type,
};
pub use config::get_detector_options;

// Native API
pub use bridge::{
    HandFrame, HandLandmark, FrameError, HAND_FLOATS,
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use classifier::{
    classify, classify_extension, finger_extension,
    FingerExtension, GestureLabel, GESTURE_LABELS,
};
pub use config::{
    DetectorOptions, FireMode, GestureParams, ParamsError,
    DEFAULT_DWELL_MS, FINGER_EXTENSION_MARGIN, HAND_LANDMARK_COUNT,
    LANDMARK_STRIDE, THUMB_EXTENSION_THRESHOLD,
};
pub use debounce::{DebounceState, GestureDebouncer, Phase};
pub use status::{FrameStatus, HandStatus, SharedStatus, StatusObserver};
pub use tracker::GestureTracker;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

/// `log` backend writing to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: JsValue = format!("[{}] {}", record.target(), record.args()).into();
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::log_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // set_logger fails if start() runs twice; keep the first logger
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
    log::info!("✅ Gesture tracker ready");
}

/// Switch console logging between info and debug (per-gesture) output
#[wasm_bindgen]
pub fn set_log_level(verbose: bool) {
    log::set_max_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
}
