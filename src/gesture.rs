// Pose classification from one frame's hand landmarks.
// Visual outcome: while you hold the "wand" pose (index finger pointing up,
// the other fingers curled), the pipeline draws; break the pose and it stops.
//
// Everything here is a pure function of a single LandmarkSet. There is no
// temporal smoothing: a jittery detection can flicker the pose frame to
// frame, and that is accepted behavior for this core.

use crate::config::Config;
use crate::tracking::{
    INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP,
    INDEX_MCP, PINKY_MCP, THUMB_IP, THUMB_TIP,
};
use crate::types::Point;

/// Which digits are extended this frame. Derived, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

/// Fixed (tip, pip) landmark pairs for the four fingers that fold vertically.
/// A finger counts as extended when its tip sits strictly above the middle
/// knuckle on screen (smaller y, origin top-left).
const FINGER_PAIRS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

pub struct GestureClassifier {
    thumb_palm_ratio: f32,
    thumb_min_px: i32,
}

impl GestureClassifier {
    pub fn new(config: &Config) -> Self {
        Self {
            thumb_palm_ratio: config.thumb_palm_ratio,
            thumb_min_px: config.thumb_min_px,
        }
    }

    /// Classify all five digits from one landmark set.
    /// Fails safe: anything shorter than the full 21 points (including an
    /// empty set on a no-hand frame) reads as "every finger down".
    pub fn fingers(&self, landmarks: &[Point]) -> FingerState {
        if landmarks.len() < 21 {
            return FingerState::default();
        }

        let extended = |tip: usize, pip: usize| landmarks[tip].1 < landmarks[pip].1;

        // The thumb folds sideways, not down, so compare x distance between
        // its tip and the joint below against a hand-scale threshold.
        let thumb_span = (landmarks[THUMB_TIP].0 - landmarks[THUMB_IP].0).abs();

        FingerState {
            thumb: thumb_span > self.thumb_threshold(landmarks),
            index: extended(FINGER_PAIRS[0].0, FINGER_PAIRS[0].1),
            middle: extended(FINGER_PAIRS[1].0, FINGER_PAIRS[1].1),
            ring: extended(FINGER_PAIRS[2].0, FINGER_PAIRS[2].1),
            pinky: extended(FINGER_PAIRS[3].0, FINGER_PAIRS[3].1),
        }
    }

    /// The wand pose: index up, middle/ring/pinky down.
    /// The thumb is classified but deliberately ignored here; the pose only
    /// cares about the pointing silhouette.
    pub fn wand_active(&self, landmarks: &[Point]) -> bool {
        let state = self.fingers(landmarks);
        state.index && !state.middle && !state.ring && !state.pinky
    }

    /// Thumb threshold in pixels for this frame's hand, scaled by palm width
    /// (index knuckle to pinky knuckle) so it tracks how large the hand
    /// appears, with a floor for degenerate detections.
    fn thumb_threshold(&self, landmarks: &[Point]) -> i32 {
        let (ax, ay) = landmarks[INDEX_MCP];
        let (bx, by) = landmarks[PINKY_MCP];
        let palm = (((ax - bx).pow(2) + (ay - by).pow(2)) as f32).sqrt();
        let scaled = (palm * self.thumb_palm_ratio) as i32;
        scaled.max(self.thumb_min_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LandmarkSet;

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(&Config::default())
    }

    /// Build a 21-point hand with the requested digits extended.
    /// Extended fingers place the tip above the pip; curled ones below.
    fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> LandmarkSet {
        let mut lm: LandmarkSet = vec![(100, 300); 21];

        for (i, (tip, pip)) in FINGER_PAIRS.iter().enumerate() {
            let x = 100 + 40 * i as i32;
            lm[*pip] = (x, 200);
            lm[*tip] = (x, if [index, middle, ring, pinky][i] { 150 } else { 250 });
        }

        // Palm width 160 px → thumb threshold ≈ 19 px at default config
        lm[INDEX_MCP] = (100, 220);
        lm[PINKY_MCP] = (260, 220);
        lm[THUMB_IP] = (80, 260);
        lm[THUMB_TIP] = (if thumb { 40 } else { 78 }, 250);

        lm
    }

    #[test]
    fn short_sets_read_as_all_down() {
        let c = classifier();
        for len in [0usize, 1, 5, 20] {
            let lm = vec![(50, 50); len];
            assert_eq!(c.fingers(&lm), FingerState::default(), "len {len}");
            assert!(!c.wand_active(&lm), "len {len}");
        }
    }

    #[test]
    fn recognizes_each_digit_independently() {
        let c = classifier();
        let state = c.fingers(&hand(true, true, false, true, false));
        assert_eq!(
            state,
            FingerState { thumb: true, index: true, middle: false, ring: true, pinky: false }
        );
    }

    #[test]
    fn wand_truth_table_ignores_thumb() {
        let c = classifier();
        for bits in 0..32u32 {
            let thumb = bits & 16 != 0;
            let index = bits & 8 != 0;
            let middle = bits & 4 != 0;
            let ring = bits & 2 != 0;
            let pinky = bits & 1 != 0;

            let expect = index && !middle && !ring && !pinky;
            let lm = hand(thumb, index, middle, ring, pinky);
            assert_eq!(c.wand_active(&lm), expect, "combination {bits:05b}");
        }
    }

    #[test]
    fn index_comparison_is_strict() {
        let c = classifier();

        let mut lm = hand(false, true, false, false, false);
        lm[INDEX_TIP] = (100, 100);
        lm[INDEX_PIP] = (100, 150);
        assert!(c.fingers(&lm).index);

        lm[INDEX_TIP] = (100, 150);
        lm[INDEX_PIP] = (100, 100);
        assert!(!c.fingers(&lm).index);

        // Equal y is not "above"; a flat finger does not count as extended.
        lm[INDEX_TIP] = (100, 120);
        lm[INDEX_PIP] = (100, 120);
        assert!(!c.fingers(&lm).index);
    }

    #[test]
    fn thumb_threshold_scales_with_palm_width() {
        let c = classifier();

        // 18 px of thumb spread: under threshold for a 160 px palm...
        let mut lm = hand(false, true, false, false, false);
        lm[THUMB_IP] = (80, 260);
        lm[THUMB_TIP] = (62, 250);
        assert!(!c.fingers(&lm).thumb);

        // ...but over threshold once the hand appears half the size.
        lm[INDEX_MCP] = (100, 220);
        lm[PINKY_MCP] = (180, 220);
        assert!(c.fingers(&lm).thumb);
    }
}
