//! Drawing surfaces the frame driver renders into.

use std::convert::Infallible;
use std::fmt::Debug;

use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};
use grid_watchface_graphics::Framebuffer;

/// A host surface with a lock/post cycle per frame.
pub trait Surface: Send + 'static {
    type Canvas: DrawTarget<Color = Rgb565, Error = Self::DrawError>;
    type DrawError: Debug;

    /// Borrow the back buffer for drawing, or `None` if the surface cannot
    /// provide one right now.
    fn lock_canvas(&mut self) -> Option<&mut Self::Canvas>;

    /// Hand the buffer borrowed by [`Surface::lock_canvas`] to the display.
    fn unlock_and_post(&mut self);
}

/// Surface backed by an in-memory frame buffer.
#[derive(Debug)]
pub struct MemorySurface {
    canvas: Framebuffer,
    available: bool,
    locked: bool,
    posted_frames: u64,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Framebuffer::new(width, height),
            available: true,
            locked: false,
            posted_frames: 0,
        }
    }

    /// Make [`Surface::lock_canvas`] fail, as a surface mid-teardown would.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn posted_frames(&self) -> u64 {
        self.posted_frames
    }

    /// Last posted frame.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.canvas
    }
}

impl Surface for MemorySurface {
    type Canvas = Framebuffer;
    type DrawError = Infallible;

    fn lock_canvas(&mut self) -> Option<&mut Framebuffer> {
        if !self.available {
            return None;
        }
        self.locked = true;
        Some(&mut self.canvas)
    }

    fn unlock_and_post(&mut self) {
        if std::mem::take(&mut self.locked) {
            self.posted_frames += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posting_counts_only_locked_frames() {
        let mut surface = MemorySurface::new(4, 4);
        surface.unlock_and_post();
        assert_eq!(surface.posted_frames(), 0);

        assert!(surface.lock_canvas().is_some());
        surface.unlock_and_post();
        surface.unlock_and_post();
        assert_eq!(surface.posted_frames(), 1);
    }

    #[test]
    fn unavailable_surface_yields_no_canvas() {
        let mut surface = MemorySurface::new(4, 4);
        surface.set_available(false);
        assert!(surface.lock_canvas().is_none());
        surface.unlock_and_post();
        assert_eq!(surface.posted_frames(), 0);
    }
}
