//! Scrolling grid background.
//!
//! The grid is periodic with period `spacing`, so scrolling is just a phase
//! shift: one integer offset advanced per frame and wrapped back to zero
//! before it reaches the spacing.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{DrawTarget, Point, Primitive, Size},
    primitives::{Line, PrimitiveStyle},
    Drawable,
};

use crate::direction::ActiveDirections;
use crate::mode::{Palette, GLOW_RADIUS};

/// Number of grid cells along the height of the face.
pub const GRID_DIVISIONS: u32 = 10;

pub fn grid_spacing(height: u32) -> u32 {
    height / GRID_DIVISIONS
}

#[derive(Debug, Default)]
pub struct GridRenderer {
    offset: u32,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Advance the scroll phase by one frame.
    pub fn advance(&mut self, spacing: u32) {
        self.offset = if self.offset + 1 < spacing {
            self.offset + 1
        } else {
            0
        };
    }

    /// Advance the offset and draw the grid lines for this frame.
    ///
    /// Must be called exactly once per frame since every call advances the
    /// scroll phase.
    pub fn render<D>(
        &mut self,
        target: &mut D,
        directions: ActiveDirections,
        palette: &Palette,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let size = target.bounding_box().size;
        self.advance(grid_spacing(size.height));

        // Glow goes underneath every line so neighbours never cover a line.
        if let Some(glow) = palette.glow {
            let style = PrimitiveStyle::with_stroke(glow, 1 + 2 * GLOW_RADIUS);
            for line in grid_lines(size, self.offset, directions) {
                line.into_styled(style).draw(target)?;
            }
        }

        let style = PrimitiveStyle::with_stroke(palette.grid, 1);
        for line in grid_lines(size, self.offset, directions) {
            line.into_styled(style).draw(target)?;
        }

        Ok(())
    }
}

/// Lines for one frame, alternating horizontal and vertical.
///
/// The loop runs `spacing` times rather than once per visible line; the
/// extra lines fall outside the face and are clipped.
pub fn grid_lines(
    size: Size,
    offset: u32,
    directions: ActiveDirections,
) -> impl Iterator<Item = Line> {
    let spacing = saturating_i32(grid_spacing(size.height));
    let far_x = saturating_i32(size.width).saturating_add(spacing);
    let far_y = saturating_i32(size.height).saturating_add(spacing);
    let offset = saturating_i32(offset);
    let shift_x = directions.shift_x(offset);
    let shift_y = directions.shift_y(offset);

    (0..spacing).flat_map(move |i| {
        let line_start = i.saturating_mul(spacing);
        let y = line_start.saturating_add(shift_y);
        let x = line_start.saturating_add(shift_x);
        [
            Line::new(Point::new(-spacing, y), Point::new(far_x, y)),
            Line::new(Point::new(x, far_y), Point::new(x, -spacing)),
        ]
    })
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
