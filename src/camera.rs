// Opens the webcam and converts frames into the packed buffer the window
// and the ink layer use. Visual expectation: `next_frame()` hands back a
// FrameBuffer of 0x00RRGGBB pixels, one camera frame at a time.

use crate::config::Config;
use crate::error::Error;
use crate::types::FrameBuffer;

use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

// `image` crate types back nokhwa's decode target (ImageBuffer<Rgb<u8>, _>).
use image::{ImageBuffer, Rgb};

// A small wrapper around nokhwa::Camera so the main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Open the configured camera at the requested resolution and FPS,
    /// falling back to the closest format the device supports.
    /// On success nothing shows on screen yet; we just hold an open stream.
    pub fn new(config: &Config) -> Result<Self, Error> {
        // 1) Choose the device (0 = default webcam).
        let idx = CameraIndex::Index(config.camera_index);

        // 2) Ask for the configured format; the device may pick a neighbor.
        let fmt = CameraFormat::new(
            Resolution::new(config.frame_width, config.frame_height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            config.fps,
        );
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        // 3) Create the camera (this fails if no device exists).
        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        // 4) Start streaming frames.
        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // 5) Report what the stream actually delivers; the window and the ink
        //    layer are sized to this, not to the request.
        let actual = cam.resolution();
        println!("[INFO] Camera open - Resolution: {}x{}", actual.width(), actual.height());

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
        })
    }

    /// Grab one frame and convert it to packed 0x00RRGGBB pixels.
    /// Blocks until the camera has a new frame ready.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let rgb_img: ImageBuffer<Rgb<u8>, Vec<u8>> = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        // Pack RGB bytes into the window's u32 layout.
        let (w, h) = rgb_img.dimensions();
        let mut out = Vec::with_capacity((w as usize) * (h as usize));
        for pixel in rgb_img.pixels() {
            let r = pixel[0] as u32;
            let g = pixel[1] as u32;
            let b = pixel[2] as u32;
            out.push((r << 16) | (g << 8) | b);
        }

        Ok(FrameBuffer {
            width: w as usize,
            height: h as usize,
            pixels: out,
        })
    }

    /// The resolution the camera is actually delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
