// Per-frame orchestration: landmarks in, composited frame out.
// Kept as a free function (no state of its own) so the exact ordering of
// pen transitions is testable without a camera or a window.

use crate::canvas::StrokeCanvas;
use crate::gesture::GestureClassifier;
use crate::types::{FrameBuffer, Point};

/// What this frame amounted to, for the HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    pub hand_present: bool,
    pub wand_active: bool,
    pub tip: Option<Point>,
}

/// Drive one frame through the classifier and the stroke canvas.
///
/// The call order is load-bearing:
/// - a no-hand frame lifts the pen FIRST, so a hand reappearing later can
///   never draw a segment back to a stale cursor;
/// - start_stroke runs before draw_point, so a stroke beginning this frame
///   records its first position without drawing;
/// - the tip marker goes onto the live frame before compositing, so the ink
///   layer lights up over it exactly like it does over the video.
pub fn run_frame(
    classifier: &GestureClassifier,
    canvas: &mut StrokeCanvas,
    frame: &mut FrameBuffer,
    landmarks: &[Point],
    tip: Option<Point>,
) -> (FrameBuffer, FrameOutcome) {
    if landmarks.is_empty() {
        // No hand this frame: pen up, nothing to classify.
        canvas.end_stroke();
        let composited = canvas.overlay(frame);
        return (
            composited,
            FrameOutcome { hand_present: false, wand_active: false, tip: None },
        );
    }

    let active = classifier.wand_active(landmarks);

    if let Some((x, y)) = tip {
        if active {
            canvas.start_stroke();
            canvas.draw_point(x, y);
        } else {
            canvas.end_stroke();
        }
        canvas.render_cursor(frame, x, y, active);
    }
    // A hand without a usable tip position changes nothing: the pen state
    // carries over and no marker is drawn.

    let composited = canvas.overlay(frame);
    (
        composited,
        FrameOutcome { hand_present: true, wand_active: active, tip },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tracking::{INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP};
    use crate::types::LandmarkSet;

    const W: usize = 64;
    const H: usize = 48;

    fn setup() -> (GestureClassifier, StrokeCanvas) {
        let config = Config::default();
        (
            GestureClassifier::new(&config),
            StrokeCanvas::new(W, H, config.style),
        )
    }

    fn frame() -> FrameBuffer {
        FrameBuffer::blank(W, H)
    }

    /// A hand with the wand pose (or an open palm) whose index tip is at
    /// (x, y). Only the comparisons the classifier reads are populated.
    fn hand_at(x: i32, y: i32, wand: bool) -> LandmarkSet {
        let mut lm: LandmarkSet = vec![(0, 500); 21];
        lm[INDEX_TIP] = (x, y);
        lm[INDEX_PIP] = (x, y + 60);
        for (tip, pip) in [(MIDDLE_TIP, MIDDLE_PIP), (RING_TIP, RING_PIP), (PINKY_TIP, PINKY_PIP)] {
            lm[pip] = (x, 300);
            lm[tip] = (x, if wand { 400 } else { 200 });
        }
        lm
    }

    fn drive(
        classifier: &GestureClassifier,
        canvas: &mut StrokeCanvas,
        landmarks: &[(i32, i32)],
    ) -> FrameOutcome {
        let tip = landmarks.get(INDEX_TIP).copied();
        let mut fb = frame();
        let (_, outcome) = run_frame(classifier, canvas, &mut fb, landmarks, tip);
        outcome
    }

    fn ink_between(canvas: &StrokeCanvas, a: (usize, usize)) -> bool {
        canvas.overlay(&frame()).pixels[a.1 * W + a.0] != 0
    }

    #[test]
    fn no_hand_frame_reports_inactive() {
        let (classifier, mut canvas) = setup();
        let outcome = drive(&classifier, &mut canvas, &[]);
        assert_eq!(
            outcome,
            FrameOutcome { hand_present: false, wand_active: false, tip: None }
        );
    }

    #[test]
    fn wand_frames_accumulate_one_stroke() {
        let (classifier, mut canvas) = setup();
        drive(&classifier, &mut canvas, &hand_at(10, 24, true));
        let o = drive(&classifier, &mut canvas, &hand_at(40, 24, true));
        assert!(o.wand_active);
        assert!(ink_between(&canvas, (25, 24)));
    }

    #[test]
    fn gesture_loss_between_strokes_never_connects_them() {
        let (classifier, mut canvas) = setup();

        // Stroke one at the left edge.
        drive(&classifier, &mut canvas, &hand_at(10, 10, true));
        drive(&classifier, &mut canvas, &hand_at(14, 10, true));

        // Pose breaks (open palm), then a new stroke far away.
        let o = drive(&classifier, &mut canvas, &hand_at(20, 20, false));
        assert!(o.hand_present && !o.wand_active);

        drive(&classifier, &mut canvas, &hand_at(50, 40, true));
        drive(&classifier, &mut canvas, &hand_at(54, 40, true));

        // Midpoint between the two strokes must stay clean.
        assert!(!ink_between(&canvas, (32, 25)));
        assert!(ink_between(&canvas, (52, 40)));
    }

    #[test]
    fn hand_loss_lifts_the_pen_too() {
        let (classifier, mut canvas) = setup();

        drive(&classifier, &mut canvas, &hand_at(10, 10, true));
        drive(&classifier, &mut canvas, &hand_at(14, 10, true));

        // Detector drops out entirely for a frame.
        drive(&classifier, &mut canvas, &[]);

        drive(&classifier, &mut canvas, &hand_at(50, 40, true));
        drive(&classifier, &mut canvas, &hand_at(54, 40, true));
        assert!(!ink_between(&canvas, (32, 25)));
    }

    #[test]
    fn first_wand_frame_draws_no_segment_from_a_stale_cursor() {
        let (classifier, mut canvas) = setup();

        // One-frame wand blip records a cursor...
        drive(&classifier, &mut canvas, &hand_at(10, 10, true));
        // ...which the idle frame must discard...
        drive(&classifier, &mut canvas, &hand_at(30, 30, false));
        // ...so this frame records a fresh start, drawing nothing yet.
        drive(&classifier, &mut canvas, &hand_at(50, 40, true));

        assert!(!canvas.overlay(&frame()).pixels.iter().any(|p| *p != 0));
    }

    #[test]
    fn idle_hand_shows_the_idle_marker_on_the_frame() {
        let (classifier, mut canvas) = setup();
        let lm = hand_at(30, 24, false);
        let mut fb = frame();
        let (composited, outcome) =
            run_frame(&classifier, &mut canvas, &mut fb, &lm, Some((30, 24)));

        assert!(!outcome.wand_active);
        // The idle ring sits 8 px from the tip on the composited output.
        assert_ne!(composited.pixels[24 * W + 38], 0);
        // And it is cosmetic: nothing reached the ink layer.
        assert!(!canvas.overlay(&frame()).pixels.iter().any(|p| *p != 0));
    }
}
