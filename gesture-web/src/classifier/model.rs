//! Gesture labels and the extension-pattern matcher
//!
//! Three hand shapes are recognized:
//! - open palm (all five extended) -> right
//! - peace sign (index + middle only) -> left
//! - fist (nothing extended) -> rotate
//!
//! Anything else is unrecognized (`None`).

use crate::bridge::HandLandmark;
use crate::config::HAND_LANDMARK_COUNT;
use super::fingers::{finger_extension, FingerExtension};

/// Gesture labels as sent to JS (order matches `GestureLabel::from_index`)
pub const GESTURE_LABELS: [&str; 3] = ["right", "left", "rotate"];

/// Recognized gestures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    Right,
    Left,
    Rotate,
}

impl GestureLabel {
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(GestureLabel::Right),
            1 => Some(GestureLabel::Left),
            2 => Some(GestureLabel::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::Right => "right",
            GestureLabel::Left => "left",
            GestureLabel::Rotate => "rotate",
        }
    }

    /// Hand shape that produces this label
    pub fn hand_shape(&self) -> &'static str {
        match self {
            GestureLabel::Right => "open palm",
            GestureLabel::Left => "peace",
            GestureLabel::Rotate => "fist",
        }
    }
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match an extension vector against the known shapes
pub fn classify_extension(extended: &FingerExtension) -> Option<GestureLabel> {
    match *extended {
        [true, true, true, true, true] => Some(GestureLabel::Right),
        [false, true, true, false, false] => Some(GestureLabel::Left),
        [false, false, false, false, false] => Some(GestureLabel::Rotate),
        _ => None,
    }
}

/// Classify one frame of hand landmarks
pub fn classify(landmarks: &[HandLandmark; HAND_LANDMARK_COUNT]) -> Option<GestureLabel> {
    classify_extension(&finger_extension(landmarks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{
        THUMB_MCP, THUMB_TIP, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP,
        RING_MCP, RING_TIP, PINKY_MCP, PINKY_TIP,
    };

    /// Build a hand whose fingers follow `pattern` (thumb..pinky)
    fn hand_with(pattern: [bool; 5]) -> [HandLandmark; HAND_LANDMARK_COUNT] {
        let mut hand = [HandLandmark::new(0.5, 0.6); HAND_LANDMARK_COUNT];
        hand[THUMB_MCP].x = 0.45;
        hand[THUMB_TIP].x = if pattern[0] { 0.3 } else { 0.48 };

        let joints = [
            (INDEX_TIP, INDEX_MCP),
            (MIDDLE_TIP, MIDDLE_MCP),
            (RING_TIP, RING_MCP),
            (PINKY_TIP, PINKY_MCP),
        ];
        for (i, (tip, knuckle)) in joints.iter().enumerate() {
            hand[*knuckle].y = 0.6;
            hand[*tip].y = if pattern[i + 1] { 0.35 } else { 0.65 };
        }
        hand
    }

    fn all_patterns() -> impl Iterator<Item = [bool; 5]> {
        (0u8..32).map(|bits| {
            let mut p = [false; 5];
            for (i, f) in p.iter_mut().enumerate() {
                *f = bits & (1 << i) != 0;
            }
            p
        })
    }

    #[test]
    fn test_open_palm_is_right() {
        assert_eq!(classify(&hand_with([true; 5])), Some(GestureLabel::Right));
    }

    #[test]
    fn test_peace_is_left() {
        assert_eq!(
            classify(&hand_with([false, true, true, false, false])),
            Some(GestureLabel::Left)
        );
    }

    #[test]
    fn test_fist_is_rotate() {
        assert_eq!(classify(&hand_with([false; 5])), Some(GestureLabel::Rotate));
    }

    #[test]
    fn test_near_misses_unrecognized() {
        // Peace sign with the thumb out
        assert_eq!(classify(&hand_with([true, true, true, false, false])), None);
        // Open palm with the pinky curled
        assert_eq!(classify(&hand_with([true, true, true, true, false])), None);
        // Pointing
        assert_eq!(classify(&hand_with([false, true, false, false, false])), None);
    }

    #[test]
    fn test_only_three_patterns_recognized() {
        let recognized: Vec<_> = all_patterns()
            .filter_map(|p| classify(&hand_with(p)).map(|label| (p, label)))
            .collect();
        assert_eq!(recognized.len(), 3);
        for (pattern, label) in recognized {
            assert_eq!(classify_extension(&pattern), Some(label));
        }
    }

    #[test]
    fn test_z_is_ignored() {
        let mut hand = hand_with([true; 5]);
        for (i, lm) in hand.iter_mut().enumerate() {
            lm.z = -0.5 + i as f32 * 0.05;
        }
        assert_eq!(classify(&hand), Some(GestureLabel::Right));
    }

    #[test]
    fn test_label_strings() {
        for (i, name) in GESTURE_LABELS.iter().enumerate() {
            let label = GestureLabel::from_index(i).unwrap();
            assert_eq!(label.as_str(), *name);
            assert_eq!(label.to_string(), *name);
        }
        assert_eq!(GestureLabel::from_index(3), None);
        assert_eq!(GestureLabel::Rotate.hand_shape(), "fist");
    }
}
