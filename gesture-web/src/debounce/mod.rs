//! Debounce module - turns per-frame labels into confirmed gestures
//!
//! Re-exports only. All logic in submodules.

mod state;
mod debouncer;

pub use state::{DebounceState, Phase};
pub use debouncer::GestureDebouncer;
