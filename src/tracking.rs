// The hand-detection boundary.
// The gesture/canvas core only ever sees this trait: 21 pixel landmarks per
// frame, or nothing. A real landmark model (MediaPipe-style) plugs in by
// implementing `HandTracker`; the built-in `PointerTracker` below synthesizes
// a hand at the mouse so the whole pipeline runs without one.

use crate::draw::{draw_dot, draw_line};
use crate::types::{FrameBuffer, LandmarkSet, Point};

/* ---------- anatomical landmark numbering (0 = wrist, tips at 4n) ---------- */

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8; // the "wand" tip that draws
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// Bone connections for the on-screen skeleton.
const HAND_CONNECTIONS: [(usize, usize); 23] = [
    (0, 1), (1, 2), (2, 3), (3, 4),             // thumb
    (0, 5), (5, 6), (6, 7), (7, 8),             // index
    (0, 9), (9, 10), (10, 11), (11, 12),        // middle
    (0, 13), (13, 14), (14, 15), (15, 16),      // ring
    (0, 17), (17, 18), (18, 19), (19, 20),      // pinky
    (5, 9), (9, 13), (13, 17),                  // palm
];

/// Per-frame hand landmark source.
/// `detect` runs once per frame and caches its results on the tracker; the
/// accessors read that cache. If the backend sees several hands it keeps the
/// whole list, but `landmarks` hands out the FIRST one only and the rest are
/// deliberately discarded (single-hand app).
pub trait HandTracker {
    /// Process one frame. Returns whether a hand is present, caching the
    /// landmark results for the accessors below.
    fn detect(&mut self, frame: &FrameBuffer) -> bool;

    /// The first detected hand's 21 pixel points, or empty when there is
    /// no hand this frame.
    fn landmarks(&self) -> &[Point];

    /// One cached landmark by anatomical index, or None when absent.
    fn landmark_at(&self, index: usize) -> Option<Point> {
        self.landmarks().get(index).copied()
    }
}

/// Draw the hand skeleton on a display frame: thin bone lines plus a dot on
/// every landmark. Purely cosmetic, same role as the detector overlay in any
/// hand-tracking demo.
pub fn draw_skeleton(frame: &mut FrameBuffer, landmarks: &[Point], bone: u32, joint: u32) {
    for (a, b) in HAND_CONNECTIONS {
        if let (Some(&(x0, y0)), Some(&(x1, y1))) = (landmarks.get(a), landmarks.get(b)) {
            draw_line(frame, x0, y0, x1, y1, bone);
        }
    }
    for &(x, y) in landmarks {
        draw_dot(frame, x, y, 3, joint);
    }
}

/* ------------------------- pointer-driven backend ------------------------- */

/// Development backend: a plausible hand follows the mouse. Holding the left
/// button curls middle/ring/pinky into the wand pose; releasing opens the
/// palm. The index tip always sits exactly on the pointer, so drawing feels
/// like drawing with the mouse while exercising the real classifier path.
pub struct PointerTracker {
    hands: Vec<LandmarkSet>, // every hand this backend "sees"; hand 0 wins
    pointer: Option<Point>,
    held: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { hands: Vec::new(), pointer: None, held: false }
    }

    /// Feed this frame's pointer state before calling detect().
    pub fn set_pointer(&mut self, pos: Option<(usize, usize)>, held: bool) {
        self.pointer = pos.map(|(x, y)| (x as i32, y as i32));
        self.held = held;
    }
}

impl HandTracker for PointerTracker {
    fn detect(&mut self, _frame: &FrameBuffer) -> bool {
        self.hands.clear();
        match self.pointer {
            Some((x, y)) => {
                self.hands.push(synthesize_hand(x, y, self.held));
                true
            }
            None => false,
        }
    }

    fn landmarks(&self) -> &[Point] {
        self.hands.first().map(|h| h.as_slice()).unwrap_or(&[])
    }
}

/// Build a 21-point hand with the index tip at (x, y), pointing up.
/// `wand` curls every finger but the index; otherwise all five extend.
fn synthesize_hand(x: i32, y: i32, wand: bool) -> LandmarkSet {
    let mut lm: LandmarkSet = vec![(0, 0); 21];

    lm[WRIST] = (x + 40, y + 210);

    // Thumb sticks out sideways from the wrist.
    lm[1] = (x + 10, y + 180);
    lm[2] = (x - 20, y + 150);
    lm[THUMB_IP] = (x - 50, y + 125);
    lm[THUMB_TIP] = (x - 85, y + 112);

    // Four finger columns, index first, fanning right.
    for finger in 0..4 {
        let base = INDEX_MCP + 4 * finger; // mcp index: 5, 9, 13, 17
        let fx = x + 34 * finger as i32;
        let extended = !wand || finger == 0;

        lm[base] = (fx, y + 130);         // mcp
        lm[base + 1] = (fx, y + 90);      // pip
        if extended {
            lm[base + 2] = (fx, y + 45);  // dip
            lm[base + 3] = (fx, y);       // tip, strictly above the pip
        } else {
            lm[base + 2] = (fx + 4, y + 105);
            lm[base + 3] = (fx + 6, y + 115); // curled: tip below the pip
        }
    }

    lm
}
