use std::fs;

use chrono::NaiveTime;
use grid_watchface_graphics::{
    color::rgb565_to_rgb888, DisplayMode, DisplaySettings, Framebuffer, ScrollDirection,
    WatchFace,
};

const SIZE: u32 = 240;
const FRAMES: usize = 4;

fn save_png(fb: &Framebuffer, path: &str) -> anyhow::Result<()> {
    let img = image::RgbImage::from_fn(SIZE, SIZE, |x, y| {
        let (r, g, b) = fb.pixel(x, y).map(rgb565_to_rgb888).unwrap_or_default();
        image::Rgb([r, g, b])
    });
    img.save(path)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    fs::create_dir_all("frames")?;

    let settings = DisplaySettings {
        directions: [ScrollDirection::Up, ScrollDirection::Right]
            .into_iter()
            .collect(),
        use_24h: false,
    };
    let now = NaiveTime::from_hms_opt(19, 5, 0).ok_or_else(|| anyhow::anyhow!("invalid time"))?;

    for (name, mode) in [
        ("interactive", DisplayMode::INTERACTIVE),
        ("ambient", DisplayMode::AMBIENT),
    ] {
        let mut fb = Framebuffer::new(SIZE, SIZE);
        let mut face = WatchFace::new();
        for i in 0..FRAMES {
            face.draw_frame(&mut fb, &now, &settings, mode)?;
            let path = format!("frames/{name}-{i}.png");
            save_png(&fb, &path)?;
            println!("Frame {i} ({name}): offset {} -> {path}", face.offset());
        }
    }
    Ok(())
}
