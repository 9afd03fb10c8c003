use std::sync::{Arc, Mutex};

use grid_watchface::{
    clock::LocalClock, config::DriverConfig, FrameDriver, MemorySurface, SettingsStore,
    SurfaceEvents,
};
use grid_watchface_graphics::WatchFaceState;

mod fake_host;

const DEFAULT_SETTINGS_PATH: &str = "gridface.json";
const FACE_SIZE: u32 = 240;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    log::info!("Using settings file {settings_path}");

    let state = Arc::new(WatchFaceState::default());
    let mut settings = SettingsStore::open(&settings_path, state.clone())?;

    let mut driver = FrameDriver::new(state, Arc::new(LocalClock), DriverConfig::default());
    let surface = Arc::new(Mutex::new(MemorySurface::new(FACE_SIZE, FACE_SIZE)));
    driver.on_surface_ready(surface.clone())?;

    fake_host::fake_host_loop(&mut driver, &mut settings, surface)?;

    driver.on_surface_lost();
    Ok(())
}
