//! Status observer interface

use crate::classifier::GestureLabel;

/// Whether the detector saw a hand this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HandStatus {
    Detected,
    #[default]
    NotDetected,
}

impl HandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandStatus::Detected => "detected",
            HandStatus::NotDetected => "not detected",
        }
    }
}

/// What one frame looked like, before debouncing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameStatus {
    pub hand: HandStatus,
    /// Raw classifier output; always None when no hand was detected
    pub gesture: Option<GestureLabel>,
}

impl FrameStatus {
    pub fn detected(gesture: Option<GestureLabel>) -> Self {
        Self {
            hand: HandStatus::Detected,
            gesture,
        }
    }

    pub fn not_detected() -> Self {
        Self::default()
    }

    /// Gesture readout: the label, or "-" when there is none
    pub fn gesture_text(&self) -> &'static str {
        self.gesture.map_or("-", |g| g.as_str())
    }
}

/// Receives a status report for every processed frame
pub trait StatusObserver {
    fn on_frame(&mut self, status: &FrameStatus);
}

impl<F> StatusObserver for F
where
    F: FnMut(&FrameStatus),
{
    fn on_frame(&mut self, status: &FrameStatus) {
        self(status)
    }
}
