use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::NaiveTime;
use grid_watchface::{
    clock::FixedClock, config::DriverConfig, FrameDriver, MemorySurface, ModeChange,
    SurfaceEvents,
};
use grid_watchface_graphics::{
    DisplayMode, DisplaySettings, Framebuffer, ScrollDirection, WatchFace, WatchFaceState,
};

const TIMEOUT: Duration = Duration::from_secs(5);

fn driver(state: Arc<WatchFaceState>) -> FrameDriver<MemorySurface, FixedClock> {
    let clock = Arc::new(FixedClock::new(NaiveTime::from_hms_opt(7, 5, 0).unwrap()));
    let config = DriverConfig::default().with_update_rate(Duration::from_millis(1));
    FrameDriver::new(state, clock, config)
}

fn surface(size: u32) -> Arc<Mutex<MemorySurface>> {
    Arc::new(Mutex::new(MemorySurface::new(size, size)))
}

fn posted(surface: &Arc<Mutex<MemorySurface>>) -> u64 {
    surface.lock().unwrap().posted_frames()
}

fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < TIMEOUT {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}

#[test]
fn loop_posts_frames_until_the_surface_is_lost() {
    let mut driver = driver(Arc::new(WatchFaceState::default()));
    let surface = surface(100);

    driver.on_surface_ready(surface.clone()).unwrap();
    assert!(driver.is_running());
    assert!(wait_until(|| posted(&surface) >= 3));

    driver.on_surface_lost();
    assert!(!driver.is_running());
    let stopped_at = posted(&surface);
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(posted(&surface), stopped_at);
}

#[test]
fn replacing_the_surface_retires_the_old_loop() {
    let mut driver = driver(Arc::new(WatchFaceState::default()));
    let first = surface(100);
    let second = surface(120);

    driver.on_surface_ready(first.clone()).unwrap();
    assert!(wait_until(|| posted(&first) >= 1));

    driver.on_surface_ready(second.clone()).unwrap();
    let first_final = posted(&first);
    assert!(wait_until(|| posted(&second) >= 3));
    assert_eq!(posted(&first), first_final);
}

#[test]
fn hidden_face_draws_nothing_until_shown() {
    let mut driver = driver(Arc::new(WatchFaceState::default()));
    let surface = surface(100);

    driver.on_mode_changed(ModeChange::Visible(false));
    driver.on_surface_ready(surface.clone()).unwrap();
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(posted(&surface), 0);

    driver.on_mode_changed(ModeChange::Visible(true));
    assert!(wait_until(|| posted(&surface) >= 1));
}

#[test]
fn frames_without_a_canvas_are_skipped() {
    let mut driver = driver(Arc::new(WatchFaceState::default()));
    let surface = surface(100);
    surface.lock().unwrap().set_available(false);

    driver.on_surface_ready(surface.clone()).unwrap();
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(posted(&surface), 0);

    surface.lock().unwrap().set_available(true);
    assert!(wait_until(|| posted(&surface) >= 1));
}

#[test]
fn ambient_face_redraws_only_when_asked() {
    let state = Arc::new(WatchFaceState::default());
    let mut driver = driver(state.clone());
    let surface = surface(100);

    driver.on_mode_changed(ModeChange::Ambient(true));
    driver.on_surface_ready(surface.clone()).unwrap();
    assert!(wait_until(|| posted(&surface) >= 1));
    std::thread::sleep(Duration::from_millis(30));
    let before_tick = posted(&surface);

    driver.on_time_tick();
    assert!(wait_until(|| posted(&surface) > before_tick));
}

#[test]
fn ambient_grid_stays_still_without_a_host_tick() {
    let state = Arc::new(WatchFaceState::new(DisplaySettings {
        directions: [ScrollDirection::Up].into_iter().collect(),
        use_24h: true,
    }));
    let mut driver = driver(state);
    let surface = surface(100);

    driver.on_mode_changed(ModeChange::Ambient(true));
    driver.on_surface_ready(surface.clone()).unwrap();
    assert!(wait_until(|| posted(&surface) >= 1));
    std::thread::sleep(Duration::from_millis(30));

    let frames = posted(&surface);
    let pixels = surface.lock().unwrap().framebuffer().clone();
    std::thread::sleep(Duration::from_millis(1500));

    assert_eq!(posted(&surface), frames);
    assert_eq!(*surface.lock().unwrap().framebuffer(), pixels);
}

#[test]
fn published_settings_reach_the_next_frame() {
    let state = Arc::new(WatchFaceState::default());
    let mut driver = driver(state.clone());
    let surface = surface(140);

    // Without a scroll direction the grid is the same at every offset.
    driver.on_mode_changed(ModeChange::Ambient(true));
    driver.on_surface_ready(surface.clone()).unwrap();

    let twelve_hour = DisplaySettings {
        use_24h: false,
        ..DisplaySettings::default()
    };
    let mut expected = Framebuffer::new(140, 140);
    WatchFace::new()
        .draw_frame(
            &mut expected,
            &NaiveTime::from_hms_opt(7, 5, 0).unwrap(),
            &twelve_hour,
            DisplayMode::AMBIENT,
        )
        .unwrap();

    state.publish_settings(twelve_hour);
    assert!(wait_until(|| *surface.lock().unwrap().framebuffer() == expected));
}
