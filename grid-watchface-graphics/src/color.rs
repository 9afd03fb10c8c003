use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};

pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> Rgb565 {
    // Linear rescaling to maximize color accuracy
    let r5 = ((r as u16 * 31) / 255) as u8; // 8 bits -> 5 bits (0-31)
    let g6 = ((g as u16 * 63) / 255) as u8; // 8 bits -> 6 bits (0-63)
    let b5 = ((b as u16 * 31) / 255) as u8; // 8 bits -> 5 bits (0-31)

    Rgb565::new(r5, g6, b5)
}

pub fn rgb565_to_rgb888(color: Rgb565) -> (u8, u8, u8) {
    let r8 = ((color.r() as u16 * 255) / 31) as u8;
    let g8 = ((color.g() as u16 * 255) / 63) as u8;
    let b8 = ((color.b() as u16 * 255) / 31) as u8;

    (r8, g8, b8)
}

/// An 8-bit RGB color with an alpha channel.
///
/// The display has no alpha channel, so colors are composited over the
/// black background before being converted to [`Rgb565`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb {
    pub alpha: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    pub const fn new(alpha: u8, r: u8, g: u8, b: u8) -> Self {
        Self { alpha, r, g, b }
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Composite over black and convert to the display format.
    pub fn over_black(self) -> Rgb565 {
        let scale = |c: u8| ((c as u16 * self.alpha as u16) / 255) as u8;
        rgb888_to_rgb565(scale(self.r), scale(self.g), scale(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_convert_unchanged() {
        let color = Argb::rgb(50, 50, 50);
        assert_eq!(color.over_black(), rgb888_to_rgb565(50, 50, 50));
    }

    #[test]
    fn alpha_scales_towards_black() {
        let dimmed = Argb::rgb(0, 0, 255).with_alpha(80).over_black();
        assert_eq!(dimmed, rgb888_to_rgb565(0, 0, 80));
        assert_eq!(Argb::new(0, 255, 255, 255).over_black(), Rgb565::BLACK);
    }

    #[test]
    fn primaries_survive_round_trip() {
        assert_eq!(rgb565_to_rgb888(rgb888_to_rgb565(0, 0, 255)), (0, 0, 255));
        assert_eq!(rgb565_to_rgb888(Rgb565::WHITE), (255, 255, 255));
    }
}
