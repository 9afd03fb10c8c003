use std::sync::{Arc, Mutex};
use std::time::Duration;

use grid_watchface::{
    clock::Clock, FrameDriver, MemorySurface, ModeChange, SettingsStore, SurfaceEvents,
};
use grid_watchface_graphics::ScrollDirection;

const STEP: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy)]
enum HostEvent {
    Mode(ModeChange),
    ToggleDirection(ScrollDirection),
    Toggle24h,
    Resize(u32),
    TimeTick,
}

/// Replays a fixed sequence of host and settings events, forever.
const SCRIPT: &[HostEvent] = &[
    HostEvent::ToggleDirection(ScrollDirection::Down),
    HostEvent::ToggleDirection(ScrollDirection::Right),
    HostEvent::Mode(ModeChange::Muted(true)),
    HostEvent::Mode(ModeChange::Muted(false)),
    HostEvent::ToggleDirection(ScrollDirection::Up),
    HostEvent::Toggle24h,
    HostEvent::Mode(ModeChange::Ambient(true)),
    HostEvent::TimeTick,
    HostEvent::Mode(ModeChange::Ambient(false)),
    HostEvent::Mode(ModeChange::Visible(false)),
    HostEvent::Mode(ModeChange::Visible(true)),
    HostEvent::Resize(280),
    HostEvent::ToggleDirection(ScrollDirection::Left),
    HostEvent::Toggle24h,
    HostEvent::Resize(240),
];

pub fn fake_host_loop<C: Clock>(
    driver: &mut FrameDriver<MemorySurface, C>,
    settings: &mut SettingsStore,
    mut surface: Arc<Mutex<MemorySurface>>,
) -> anyhow::Result<()> {
    for event in SCRIPT.iter().cycle() {
        std::thread::sleep(STEP);

        let posted = surface
            .lock()
            .map(|surface| surface.posted_frames())
            .unwrap_or_default();
        log::info!("{posted} frames posted, next host event: {event:?}");

        match *event {
            HostEvent::Mode(change) => driver.on_mode_changed(change),
            HostEvent::ToggleDirection(direction) => settings.toggle_direction(direction)?,
            HostEvent::Toggle24h => settings.toggle_24h()?,
            HostEvent::TimeTick => driver.on_time_tick(),
            HostEvent::Resize(size) => {
                surface = Arc::new(Mutex::new(MemorySurface::new(size, size)));
                driver.on_surface_ready(surface.clone())?;
            }
        }
    }
    Ok(())
}
