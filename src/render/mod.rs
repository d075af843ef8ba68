//! Rendering
//!
//! Scenes draw by filling a `DrawList` with colored rectangles (text is
//! expanded to rectangles through a built-in bitmap font). A `RenderBackend`
//! turns draw lists into pixels: the native backend uses wgpu, the headless
//! backend records lists for tests and replay verification.

mod draw;
mod font;
mod headless;
mod wgpu;

pub use draw::{DrawList, RectInstance};
pub use font::{draw_text, measure_text};
pub use headless::HeadlessRenderer;
pub use self::wgpu::WgpuRenderer;

/// Errors surfaced by render backends
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The surface could not produce a frame
    Surface(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "surface error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// A render backend consuming draw lists
pub trait RenderBackend {
    /// Handle a window resize
    fn resize(&mut self, width: u32, height: u32);

    /// Render one frame
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be presented
    fn render(&mut self, list: &DrawList) -> Result<(), RenderError>;

    /// Ask the backend to keep a copy of the next rendered frame
    fn request_capture(&mut self) {}

    /// Take the most recent captured frame, if any
    fn take_capture(&mut self) -> Option<image::RgbaImage> {
        None
    }
}
