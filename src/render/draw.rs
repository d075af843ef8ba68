//! Draw lists: the wire format between scenes and render backends

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use smallvec::SmallVec;

/// One screen-space rectangle instance, uploaded to the GPU as-is
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// Top-left corner in pixels
    pub position: [f32; 2],
    /// Width and height in pixels
    pub size: [f32; 2],
    /// RGBA color, 0.0 to 1.0
    pub color: [f32; 4],
}

/// A frame's worth of drawing: clear color plus ordered rectangles.
///
/// Later rectangles draw over earlier ones.
#[derive(Debug, Clone)]
pub struct DrawList {
    /// Background clear color
    pub clear: [f32; 4],
    rects: SmallVec<[RectInstance; 64]>,
}

impl DrawList {
    /// Create an empty list with the given clear color
    #[must_use]
    pub fn new(clear: [f32; 4]) -> Self {
        Self {
            clear,
            rects: SmallVec::new(),
        }
    }

    /// Append a filled rectangle
    pub fn push_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]) {
        self.rects.push(RectInstance {
            position: pos.to_array(),
            size: size.to_array(),
            color,
        });
    }

    /// Append a rectangle outline as four thin rectangles
    pub fn push_border(&mut self, pos: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) {
        let t = thickness;
        // top, bottom
        self.push_rect(pos, Vec2::new(size.x, t), color);
        self.push_rect(pos + Vec2::new(0.0, size.y - t), Vec2::new(size.x, t), color);
        // left, right
        self.push_rect(pos, Vec2::new(t, size.y), color);
        self.push_rect(pos + Vec2::new(size.x - t, 0.0), Vec2::new(t, size.y), color);
    }

    /// The rectangles in draw order
    #[must_use]
    pub fn rects(&self) -> &[RectInstance] {
        &self.rects
    }

    /// Number of rectangles
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether the list has no rectangles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Remove all rectangles, keeping the clear color
    pub fn reset(&mut self) {
        self.rects.clear();
    }
}
