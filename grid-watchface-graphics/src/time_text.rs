//! Centered time label.

use chrono::Timelike;
use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::{DrawTarget, Point, Size},
    text::Text,
    Drawable,
};
use profont::{
    PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT,
    PROFONT_7_POINT, PROFONT_9_POINT,
};

/// Available fonts, smallest first.
const FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// `HH:MM` in 24 hour mode, `hh:mm AM` otherwise.
pub fn format_time<T: Timelike>(time: &T, use_24h: bool) -> String {
    if use_24h {
        format!("{:02}:{:02}", time.hour(), time.minute())
    } else {
        let (pm, hour) = time.hour12();
        let suffix = if pm { "PM" } else { "AM" };
        format!("{:02}:{:02} {suffix}", hour, time.minute())
    }
}

/// Target glyph height for a face of the given height.
pub fn text_size(height: u32, use_24h: bool) -> f32 {
    height as f32 / if use_24h { 5.0 } else { 7.0 }
}

/// Largest font whose glyphs fit in `size` pixels, or the smallest font.
pub fn font_for_size(size: f32) -> &'static MonoFont<'static> {
    FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height as f32 <= size)
        .copied()
        .unwrap_or(FONTS[0])
}

/// Sum of the advance widths of the individual characters.
pub fn text_width(font: &MonoFont<'_>, text: &str) -> u32 {
    text.chars()
        .map(|_| font.character_size.width + font.character_spacing)
        .sum()
}

/// Baseline origin that centers `text` on a face of `size`.
pub fn centered_origin(size: Size, font: &MonoFont<'_>, text: &str, text_size: f32) -> Point {
    let center_x = size.width as f32 / 2.0;
    let center_y = size.height as f32 / 2.0;
    let width = text_width(font, text) as f32;

    Point::new(
        (center_x - width / 2.0).round() as i32,
        (center_y + text_size / 2.0).round() as i32,
    )
}

pub fn render_time<D, T>(
    target: &mut D,
    time: &T,
    use_24h: bool,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    T: Timelike,
{
    let size = target.bounding_box().size;
    let label = format_time(time, use_24h);
    let text_size = text_size(size.height, use_24h);
    let font = font_for_size(text_size);
    let origin = centered_origin(size, font, &label, text_size);

    let style = MonoTextStyle::new(font, color);
    Text::new(&label, origin, style).draw(target)?;
    Ok(())
}
