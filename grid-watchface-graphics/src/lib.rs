use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use chrono::Timelike;
use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};

pub mod color;
pub mod direction;
pub mod framebuffer;
pub mod grid;
pub mod mode;
pub mod time_text;

pub use direction::{ActiveDirections, Axis, ScrollDirection};
pub use framebuffer::Framebuffer;
pub use grid::GridRenderer;
pub use mode::{DisplayMode, Palette};

/// User settings the face reads every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub directions: ActiveDirections,
    pub use_24h: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            directions: ActiveDirections::none(),
            use_24h: true,
        }
    }
}

/// State shared between the host, the settings and the render loop.
///
/// Every field is read independently, so a frame may observe a half-applied
/// update; the next frame picks up the rest.
pub struct WatchFaceState {
    pub directions: AtomicU8,
    pub use_24h: AtomicBool,
    pub ambient: AtomicBool,
    pub muted: AtomicBool,
    pub visible: AtomicBool,
    pub invalidated: AtomicBool,
}

impl Default for WatchFaceState {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

impl WatchFaceState {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            directions: AtomicU8::new(settings.directions.bits()),
            use_24h: AtomicBool::new(settings.use_24h),
            ambient: AtomicBool::new(false),
            muted: AtomicBool::new(false),
            visible: AtomicBool::new(true),
            invalidated: AtomicBool::new(false),
        }
    }

    pub fn settings(&self) -> DisplaySettings {
        DisplaySettings {
            directions: ActiveDirections::from_bits(self.directions.load(Ordering::Relaxed)),
            use_24h: self.use_24h.load(Ordering::Relaxed),
        }
    }

    pub fn publish_settings(&self, settings: DisplaySettings) {
        self.directions
            .store(settings.directions.bits(), Ordering::Relaxed);
        self.use_24h.store(settings.use_24h, Ordering::Relaxed);
        self.invalidate();
    }

    pub fn mode(&self) -> DisplayMode {
        DisplayMode {
            ambient: self.ambient.load(Ordering::Relaxed),
            muted: self.muted.load(Ordering::Relaxed),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    /// Request a redraw on the next tick, even outside interactive mode.
    pub fn invalidate(&self) {
        self.invalidated.store(true, Ordering::Release);
    }

    pub fn take_invalidated(&self) -> bool {
        self.invalidated.swap(false, Ordering::AcqRel)
    }
}

/// The watch face: scrolling grid plus the centered time.
///
/// Holds the scroll phase, so create a fresh one whenever the surface is
/// created or resized.
#[derive(Debug, Default)]
pub struct WatchFace {
    grid: GridRenderer,
}

impl WatchFace {
    pub fn new() -> Self {
        Self {
            grid: GridRenderer::new(),
        }
    }

    pub fn offset(&self) -> u32 {
        self.grid.offset()
    }

    pub fn draw_frame<D, T>(
        &mut self,
        target: &mut D,
        now: &T,
        settings: &DisplaySettings,
        mode: DisplayMode,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        T: Timelike,
    {
        let palette = mode.palette();
        target.clear(palette.background)?;

        self.grid.render(target, settings.directions, &palette)?;

        let size = target.bounding_box().size;
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        time_text::render_time(target, now, settings.use_24h, palette.text)
    }
}
