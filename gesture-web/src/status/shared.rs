//! Shared latest-status cell
//!
//! The tracker writes through one handle, the bridge reads through a clone.
//! WASM is single-threaded, so `Rc<Cell<_>>` is enough.

use std::cell::Cell;
use std::rc::Rc;
use super::observer::{FrameStatus, StatusObserver};

#[derive(Clone, Default)]
pub struct SharedStatus {
    latest: Rc<Cell<FrameStatus>>,
}

impl SharedStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> FrameStatus {
        self.latest.get()
    }
}

impl StatusObserver for SharedStatus {
    fn on_frame(&mut self, status: &FrameStatus) {
        self.latest.set(*status);
    }
}
