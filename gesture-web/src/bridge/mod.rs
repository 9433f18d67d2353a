//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_landmarks;
mod gesture_integration;

pub use hand_landmarks::{
    // WASM entry points
    apply_hand_landmarks,
    apply_hand_landmarks_at,
    // Internal API
    HandFrame,
    HandLandmark,
    FrameError,
    // Constants
    HAND_FLOATS,
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};

pub use gesture_integration::{
    on_gesture,
    set_gesture_params,
    reset_tracking,
    get_hand_status,
    get_gesture_type,
};
