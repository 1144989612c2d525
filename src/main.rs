// What you SEE:
// • Live (mirrored) camera is always the base image.
// • Hold the wand pose — index finger up, others curled — and move the tip
//   to draw a glowing trail that stays on screen.
// • Breaking the pose lifts the pen; strokes never connect across a break.
// • C clears the drawing. ESC quits.
// • With the built-in pointer backend, the mouse stands in for the hand:
//   hold the left button for the wand pose.

mod camera;
mod canvas;
mod config;
mod draw;
mod error;
mod gesture;
mod pipeline;
mod tracking;
mod types;

use camera::CameraCapture;
use canvas::StrokeCanvas;
use config::Config;
use draw::{draw_text_5x7, Drawer};
use error::Error;
use gesture::GestureClassifier;
use std::time::{Duration, Instant};
use tracking::{draw_skeleton, HandTracker, PointerTracker, INDEX_TIP};

fn main() -> Result<(), Error> {
    /* --- Config + camera + window setup ---
       Visual: window opens with the live (mirrored) camera feed. */
    let config = Config::default();
    let mut cam = CameraCapture::new(&config)?;
    let (w, h) = cam.resolution();
    let (w, h) = (w as usize, h as usize);
    let mut drawer = Drawer::new("Magic Wand — Hand Tracking Draw", w, h)?;

    /* --- The core: classifier + persistent ink layer ---
       Visual: the ink layer starts black (invisible over the video). */
    let classifier = GestureClassifier::new(&config);
    let mut canvas = StrokeCanvas::new(w, h, config.style);

    /* --- Hand tracking backend ---
       The pointer backend synthesizes a hand at the mouse; swap in a real
       landmark model by implementing HandTracker. */
    let mut tracker = PointerTracker::new();
    println!("[INFO] Tracker ready (pointer backend)");
    println!("[INFO] ESC to exit, C to clear the drawing\n");

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Grab a fresh frame and mirror it (selfie view). */
        let mut frame = cam.next_frame()?;
        frame.mirror_horizontal();

        /* 2) Inputs. */
        if drawer.c_pressed_once() {
            canvas.clear(); // visual: every stroke disappears at once
            println!("[INFO] Canvas cleared");
        }
        tracker.set_pointer(drawer.mouse_pos(), drawer.left_mouse_down());

        /* 3) Hand detection for this frame (results cached on the tracker).
           Visual: when a hand is present, its skeleton is drawn on the feed. */
        let hand_present = tracker.detect(&frame);
        if hand_present {
            draw_skeleton(&mut frame, tracker.landmarks(), config.skeleton_bone, config.skeleton_joint);
        }

        /* 4) Classify + drive the pen + composite.
           Visual: trails extend while the wand pose holds; the tip marker
           rides on the fingertip. */
        let (mut screen, outcome) = pipeline::run_frame(
            &classifier,
            &mut canvas,
            &mut frame,
            tracker.landmarks(),
            tracker.landmark_at(INDEX_TIP),
        );

        /* 5) HUD text on top of the composited image. */
        let status = if outcome.wand_active {
            "WAND DRAWING"
        } else if outcome.hand_present {
            "HAND IDLE"
        } else {
            "NO HAND"
        };
        let hud = format!("{status} | C: CLEAR | ESC: EXIT | {hud_fps_text}");
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00_FF_FF_FF);

        /* 6) Present to the window. */
        drawer.present(&screen)?;

        /* 7) FPS counter (terminal + HUD once per second). */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            println!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
