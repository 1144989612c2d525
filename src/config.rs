// All knobs in one immutable struct, built once in main and handed to the
// classifier and the stroke canvas at construction. Nothing reads globals.

/// Colors are packed 0x00RRGGBB, same layout the window buffer uses.
#[derive(Clone, Copy)]
pub struct StrokeStyle {
    pub outer_color: u32,     // wide under-stroke (the white "glow" body)
    pub inner_color: u32,     // thin bright core drawn on top
    pub outer_thickness: i32, // pixels
    pub inner_thickness: i32, // pixels
    pub cursor_active: u32,   // fill of the wand-tip marker while drawing
    pub cursor_idle: u32,     // ring color while the pose is not held
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            outer_color: 0x00_FF_FF_FF,
            inner_color: 0x00_FF_D2_1E, // warm gold core
            outer_thickness: 8,
            inner_thickness: 3,
            cursor_active: 0x00_FF_E6_32,
            cursor_idle: 0x00_96_96_96,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Config {
    // Camera
    pub camera_index: u32,
    pub frame_width: u32,  // requested; the device may deliver something close
    pub frame_height: u32,
    pub fps: u32,

    // Gesture classification.
    // The thumb moves sideways, so its "extended" test is a horizontal
    // distance. Rather than a fixed pixel count (which only holds at one
    // resolution), the threshold is a fraction of the palm width measured
    // from the same landmark set, with a pixel floor for degenerate frames.
    pub thumb_palm_ratio: f32,
    pub thumb_min_px: i32,

    // Rendering
    pub style: StrokeStyle,
    pub skeleton_bone: u32,  // thin lines between hand joints
    pub skeleton_joint: u32, // dot on each landmark
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera_index: 0,
            frame_width: 1280,
            frame_height: 720,
            fps: 30,
            // ~20 px on a typical hand filling a 720p frame (palm ≈ 170 px)
            thumb_palm_ratio: 0.12,
            thumb_min_px: 8,
            style: StrokeStyle::default(),
            skeleton_bone: 0x00_00_FF_00,
            skeleton_joint: 0x00_FF_00_FF,
        }
    }
}
