// The persistent ink layer plus pen state.
// Visual outcomes:
// - While the wand pose is held, moving the index tip leaves a glowing
//   two-tone trail: a wide white body with a thin gold core on top.
// - Dropping the pose lifts the pen; the next stroke never connects back to
//   where the previous one ended.
// - The ink layer is added over the live video each frame, so black (unset)
//   ink pixels leave the video alone and bright trails light up.

use crate::config::StrokeStyle;
use crate::types::{FrameBuffer, Point};

pub struct StrokeCanvas {
    ink: FrameBuffer,        // committed strokes; zero = no ink
    cursor: Option<Point>,   // last committed position while a stroke runs
    drawing: bool,           // pen down?
    style: StrokeStyle,
}

impl StrokeCanvas {
    /// Allocate the ink layer once; it lives (and accumulates) until clear().
    pub fn new(width: usize, height: usize, style: StrokeStyle) -> Self {
        Self {
            ink: FrameBuffer::blank(width, height),
            cursor: None,
            drawing: false,
            style,
        }
    }

    /// Pen down. Idempotent, and does not touch the cursor: the first
    /// draw_point after this records a position without drawing a segment.
    pub fn start_stroke(&mut self) {
        self.drawing = true;
    }

    /// Pen up. Drops the flag and the cursor together so a later stroke can
    /// never draw a segment back to this one's end point.
    pub fn end_stroke(&mut self) {
        self.drawing = false;
        self.cursor = None;
    }

    /// Commit the tip position for this frame. Draws the segment from the
    /// previous cursor only while the pen is down and a previous position
    /// exists; in every case the cursor moves to (x, y) so the next call has
    /// a start point.
    pub fn draw_point(&mut self, x: i32, y: i32) {
        if self.drawing {
            if let Some((px, py)) = self.cursor {
                // Two passes: wide body first, bright core over it.
                draw_segment_aa(
                    &mut self.ink,
                    (px, py),
                    (x, y),
                    self.style.outer_color,
                    self.style.outer_thickness,
                );
                draw_segment_aa(
                    &mut self.ink,
                    (px, py),
                    (x, y),
                    self.style.inner_color,
                    self.style.inner_thickness,
                );
            }
        }
        self.cursor = Some((x, y));
    }

    /// Wipe every stroke and reset the pen. The one explicit user reset.
    pub fn clear(&mut self) {
        self.ink.pixels.fill(0);
        self.cursor = None;
        self.drawing = false;
    }

    /// Composite the ink over a video frame (per-channel saturating add).
    /// Pure: the ink layer itself is never touched.
    pub fn overlay(&self, frame: &FrameBuffer) -> FrameBuffer {
        let mut out = frame.clone();
        out.add_saturating(&self.ink);
        out
    }

    /// Draw the wand-tip marker on a display frame. Cosmetic only; nothing
    /// here survives to the next frame.
    /// Visual: while drawing, a wide white ring around a filled gold disc
    /// with a white center dot; otherwise a small gray ring.
    pub fn render_cursor(&self, frame: &mut FrameBuffer, x: i32, y: i32, active: bool) {
        if active {
            draw_ring_aa(frame, (x, y), 20.0, 2.0, 0x00_FF_FF_FF);
            draw_disc_aa(frame, (x, y), 10.0, self.style.cursor_active);
            draw_disc_aa(frame, (x, y), 4.0, 0x00_FF_FF_FF);
        } else {
            draw_ring_aa(frame, (x, y), 8.0, 2.0, self.style.cursor_idle);
        }
    }
}

/* ---------- soft rasterizers (coverage-weighted, round caps) ---------- */

/// Blend `color` into the pixel at (x, y) with the given coverage in [0, 1].
/// Visual: coverage 1 replaces the pixel, fractions feather the edge.
#[inline]
fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32, coverage: f32) {
    if coverage <= 0.0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }

    let idx = y * fb.width + x;
    let old = fb.pixels[idx];
    let cov = coverage.min(1.0);
    let inv = 1.0 - cov;

    let mix = |o: u32, n: u32| -> u32 {
        ((o as f32) * inv + (n as f32) * cov).round().min(255.0) as u32
    };

    let r = mix((old >> 16) & 0xFF, (color >> 16) & 0xFF);
    let g = mix((old >> 8) & 0xFF, (color >> 8) & 0xFF);
    let b = mix(old & 0xFF, color & 0xFF);
    fb.pixels[idx] = (r << 16) | (g << 8) | b;
}

/// Distance from point p to the segment a..b.
fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;

    // Degenerate segment: both ends on the same pixel.
    let t = if len2 <= f32::EPSILON {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
    };

    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Thick anti-aliased segment with round caps: per-pixel coverage from the
/// distance to the segment, scanned over an inflated bounding box.
fn draw_segment_aa(fb: &mut FrameBuffer, a: Point, b: Point, color: u32, thickness: i32) {
    let half = thickness as f32 / 2.0;
    let pad = half.ceil() as i32 + 1;

    let x0 = a.0.min(b.0) - pad;
    let x1 = a.0.max(b.0) + pad;
    let y0 = a.1.min(b.1) - pad;
    let y1 = a.1.max(b.1) + pad;

    let fa = (a.0 as f32, a.1 as f32);
    let fb_end = (b.0 as f32, b.1 as f32);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = segment_distance((x as f32, y as f32), fa, fb_end);
            blend_pixel(fb, x, y, color, half + 0.5 - d);
        }
    }
}

/// Filled anti-aliased disc.
fn draw_disc_aa(fb: &mut FrameBuffer, center: Point, radius: f32, color: u32) {
    let pad = radius.ceil() as i32 + 1;
    for y in (center.1 - pad)..=(center.1 + pad) {
        for x in (center.0 - pad)..=(center.0 + pad) {
            let dx = (x - center.0) as f32;
            let dy = (y - center.1) as f32;
            let d = (dx * dx + dy * dy).sqrt();
            blend_pixel(fb, x, y, color, radius + 0.5 - d);
        }
    }
}

/// Anti-aliased ring (unfilled circle) of the given stroke thickness.
fn draw_ring_aa(fb: &mut FrameBuffer, center: Point, radius: f32, thickness: f32, color: u32) {
    let pad = (radius + thickness).ceil() as i32 + 1;
    let half = thickness / 2.0;
    for y in (center.1 - pad)..=(center.1 + pad) {
        for x in (center.0 - pad)..=(center.0 + pad) {
            let dx = (x - center.0) as f32;
            let dy = (y - center.1) as f32;
            let d = (dx * dx + dy * dy).sqrt();
            blend_pixel(fb, x, y, color, half + 0.5 - (d - radius).abs());
        }
    }
}
