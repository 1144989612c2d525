// A tiny error type so we don't rely on anyhow/thiserror.
// Only the collaborators at the edges (camera, window) can fail; the
// gesture/canvas core absorbs bad input instead of erroring (see gesture.rs).
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    CameraInit(String),   // Opening/starting the camera failed
    CameraFrame(String),  // Grabbing/decoding a frame failed
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Pushing a frame to the window failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CameraInit(s) => write!(f, "Camera init error: {s}"),
            Error::CameraFrame(s) => write!(f, "Camera frame error: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
        }
    }
}

// We don't implement std::error::Error for now to keep things minimal.
// It's easy to add later when we wire in more components.
