//! Classifier module - rule-based hand gesture classification
//!
//! Pure functions only: one frame of landmarks in, one label out.

mod fingers;
mod model;

pub use fingers::{finger_extension, FingerExtension};
pub use model::{classify, classify_extension, GestureLabel, GESTURE_LABELS};
