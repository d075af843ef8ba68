//! Headless render backend
//!
//! Records every submitted draw list instead of rasterizing. Used by
//! `Engine::run_headless`, tests and replay verification: two runs with the
//! same inputs must record identical draw lists.

use super::draw::DrawList;
use super::{RenderBackend, RenderError};

/// A render backend that records draw lists in memory
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    size: (u32, u32),
    frames: Vec<DrawList>,
}

impl HeadlessRenderer {
    /// Create a headless renderer with a virtual surface size
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            frames: Vec::new(),
        }
    }

    /// All recorded frames, in submission order
    #[must_use]
    pub fn frames(&self) -> &[DrawList] {
        &self.frames
    }

    /// The most recent frame, if any
    #[must_use]
    pub fn last_frame(&self) -> Option<&DrawList> {
        self.frames.last()
    }

    /// Virtual surface size
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Drop all recorded frames
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl RenderBackend for HeadlessRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn render(&mut self, list: &DrawList) -> Result<(), RenderError> {
        self.frames.push(list.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_records_frames() {
        let mut renderer = HeadlessRenderer::new(800, 480);

        let mut list = DrawList::new([0.1, 0.1, 0.1, 1.0]);
        list.push_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        renderer.render(&list).unwrap();
        renderer.render(&list).unwrap();

        assert_eq!(renderer.frames().len(), 2);
        assert_eq!(renderer.last_frame().unwrap().len(), 1);
    }
}
