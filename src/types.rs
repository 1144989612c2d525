// Core pixel types shared by every module.

/// One hand keypoint (or any screen position) in window pixel coordinates.
pub type Point = (i32, i32);

/// The 21-point hand a tracker reports for one frame.
/// A per-frame value with no identity; a fresh one arrives every frame.
pub type LandmarkSet = Vec<Point>;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black buffer of the given size (what an empty ink layer looks like).
    pub fn blank(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Flip the image left↔right in place.
    /// Visual: the feed behaves like a mirror, so your hand moves the
    /// expected way on screen (selfie view).
    pub fn mirror_horizontal(&mut self) {
        for row in self.pixels.chunks_exact_mut(self.width) {
            row.reverse();
        }
    }

    /// Per-channel saturating add of `other` into `self`.
    /// Visual: bright ink pixels light up over the video; black ink pixels
    /// leave the video untouched.
    pub fn add_saturating(&mut self, other: &FrameBuffer) {
        debug_assert_eq!(self.pixels.len(), other.pixels.len());
        for (dst, src) in self.pixels.iter_mut().zip(other.pixels.iter()) {
            let (a, b) = (*dst, *src);

            let r = (((a >> 16) & 0xFF) + ((b >> 16) & 0xFF)).min(255);
            let g = (((a >> 8) & 0xFF) + ((b >> 8) & 0xFF)).min(255);
            let bl = ((a & 0xFF) + (b & 0xFF)).min(255);

            *dst = (r << 16) | (g << 8) | bl;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_reverses_each_row() {
        let mut fb = FrameBuffer { width: 3, height: 2, pixels: vec![1, 2, 3, 4, 5, 6] };
        fb.mirror_horizontal();
        assert_eq!(fb.pixels, vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn add_saturates_per_channel() {
        let mut a = FrameBuffer { width: 1, height: 1, pixels: vec![0x00_F0_10_FF] };
        let b = FrameBuffer { width: 1, height: 1, pixels: vec![0x00_20_10_01] };
        a.add_saturating(&b);
        assert_eq!(a.pixels[0], 0x00_FF_20_FF);
    }
}
