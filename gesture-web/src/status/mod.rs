//! Status module - per-frame hand/gesture readouts for the page
//!
//! The tracker reports every frame to a `StatusObserver`; what the page
//! does with it (text nodes, overlays) lives on the JS side.

mod observer;
mod shared;

pub use observer::{FrameStatus, HandStatus, StatusObserver};
pub use shared::SharedStatus;
