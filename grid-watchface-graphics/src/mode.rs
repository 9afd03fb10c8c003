use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};

use crate::color::Argb;

const GRID_INTERACTIVE: Argb = Argb::rgb(0, 0, 255);
const GRID_AMBIENT: Argb = Argb::rgb(50, 50, 50);
const GLOW: Argb = Argb::rgb(0, 0, 128);
const TEXT_INTERACTIVE: Argb = Argb::new(180, 255, 255, 255);
const TEXT_AMBIENT: Argb = Argb::new(200, 255, 255, 255);

/// Grid alpha while notifications are muted.
pub const MUTED_ALPHA: u8 = 80;

/// Radius of the soft glow drawn under interactive grid lines.
pub const GLOW_RADIUS: u32 = 2;

/// Display mode as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayMode {
    pub ambient: bool,
    pub muted: bool,
}

/// Colors for one frame, already composited for the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub grid: Rgb565,
    /// Glow color, `None` when glow is disabled.
    pub glow: Option<Rgb565>,
    pub text: Rgb565,
}

impl DisplayMode {
    pub const INTERACTIVE: DisplayMode = DisplayMode {
        ambient: false,
        muted: false,
    };
    pub const AMBIENT: DisplayMode = DisplayMode {
        ambient: true,
        muted: false,
    };

    pub fn palette(self) -> Palette {
        if self.ambient {
            // Muting has no effect in ambient: the grid is already dim.
            return Palette {
                background: Rgb565::BLACK,
                grid: GRID_AMBIENT.over_black(),
                glow: None,
                text: TEXT_AMBIENT.over_black(),
            };
        }

        let alpha = if self.muted { MUTED_ALPHA } else { 255 };
        Palette {
            background: Rgb565::BLACK,
            grid: GRID_INTERACTIVE.with_alpha(alpha).over_black(),
            glow: Some(GLOW.with_alpha(alpha).over_black()),
            text: TEXT_INTERACTIVE.over_black(),
        }
    }
}
