//! Frame driver: one render thread per surface.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use anyhow::Context;
use grid_watchface_graphics::{WatchFace, WatchFaceState};

use crate::clock::Clock;
use crate::config::{DriverConfig, TIMING_WINDOW};
use crate::lifecycle::{ModeChange, SurfaceEvents};
use crate::surface::Surface;
use crate::threads::LoopThread;
use crate::timings::FrameTimings;

struct RenderLoop {
    running: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl RenderLoop {
    /// Ask the loop to finish its current frame and wait for it.
    fn stop(self) {
        self.running.store(false, Ordering::Release);
        if self.handle.join().is_err() {
            log::error!("Render loop did not shut down cleanly");
        }
    }
}

/// Starts and stops the render loop as the host's surface comes and goes.
pub struct FrameDriver<S, C> {
    state: Arc<WatchFaceState>,
    clock: Arc<C>,
    config: DriverConfig,
    render_loop: Option<RenderLoop>,
    _surface: PhantomData<fn() -> S>,
}

impl<S, C> FrameDriver<S, C> {
    pub fn is_running(&self) -> bool {
        self.render_loop.is_some()
    }

    fn stop_loop(&mut self) {
        if let Some(render_loop) = self.render_loop.take() {
            log::info!("Stopping render loop");
            render_loop.stop();
        }
    }
}

impl<S: Surface, C: Clock> FrameDriver<S, C> {
    pub fn new(state: Arc<WatchFaceState>, clock: Arc<C>, config: DriverConfig) -> Self {
        Self {
            state,
            clock,
            config,
            render_loop: None,
            _surface: PhantomData,
        }
    }
}

impl<S, C> Drop for FrameDriver<S, C> {
    fn drop(&mut self) {
        self.stop_loop();
    }
}

impl<S: Surface, C: Clock> SurfaceEvents for FrameDriver<S, C> {
    type Surface = S;

    fn on_surface_ready(&mut self, surface: Arc<Mutex<S>>) -> anyhow::Result<()> {
        // The old loop must be gone before a new one touches the surface.
        self.stop_loop();

        let running = Arc::new(AtomicBool::new(true));
        let state = self.state.clone();
        let clock = self.clock.clone();
        let config = self.config;

        let mut thread = LoopThread::new("render_loop");
        if let Some(stack_kb) = config.stack_kb {
            thread = thread.with_stack_size(stack_kb);
        }
        let handle = thread
            .spawn({
                let running = running.clone();
                move || render_loop(surface, state, clock, config, running)
            })
            .context("Failed to spawn render loop")?;

        self.state.invalidate();
        self.render_loop = Some(RenderLoop { running, handle });
        Ok(())
    }

    fn on_surface_lost(&mut self) {
        self.stop_loop();
    }

    fn on_mode_changed(&mut self, change: ModeChange) {
        log::info!("Display mode changed: {change:?}");
        let (flag, value) = match change {
            ModeChange::Ambient(value) => (&self.state.ambient, value),
            ModeChange::Muted(value) => (&self.state.muted, value),
            ModeChange::Visible(value) => (&self.state.visible, value),
        };
        flag.store(value, Ordering::Relaxed);
        self.state.invalidate();
    }

    fn on_time_tick(&mut self) {
        self.state.invalidate();
    }
}

pub fn render_loop<S: Surface, C: Clock>(
    surface: Arc<Mutex<S>>,
    state: Arc<WatchFaceState>,
    clock: Arc<C>,
    config: DriverConfig,
    running: Arc<AtomicBool>,
) {
    log::info!("Starting render loop");
    let mut face = WatchFace::new();
    let mut timings = FrameTimings::new(TIMING_WINDOW);
    let mut last_frame: Option<Instant> = None;

    while running.load(Ordering::Acquire) {
        if should_draw(&state, last_frame, &config) {
            let before = Instant::now();
            if draw_frame(&surface, &mut face, &state, clock.as_ref()) {
                last_frame = Some(before);
                if let Some(summary) = timings.record(before.elapsed()) {
                    log::info!("Average render timings:{summary}");
                }
            }
        }

        thread::sleep(config.update_rate);
    }

    log::info!("Render loop stopped");
}

/// Interactive frames run every tick; ambient frames only when invalidated
/// (or per `ambient_update_rate` if configured); hidden faces never draw.
fn should_draw(
    state: &WatchFaceState,
    last_frame: Option<Instant>,
    config: &DriverConfig,
) -> bool {
    let invalidated = state.take_invalidated();
    if !state.is_visible() {
        return false;
    }
    if !state.mode().ambient {
        return true;
    }
    if invalidated {
        return true;
    }
    match (config.ambient_update_rate, last_frame) {
        (Some(rate), Some(at)) => at.elapsed() >= rate,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Draw one frame. Returns `false` when the surface had no canvas to give.
fn draw_frame<S: Surface, C: Clock>(
    surface: &Mutex<S>,
    face: &mut WatchFace,
    state: &WatchFaceState,
    clock: &C,
) -> bool {
    let mut surface = surface.lock().unwrap_or_else(|e| e.into_inner());
    let Some(canvas) = surface.lock_canvas() else {
        log::debug!("Surface has no canvas, skipping frame");
        return false;
    };

    let result = face.draw_frame(canvas, &clock.now(), &state.settings(), state.mode());
    surface.unlock_and_post();

    if let Err(e) = result {
        log::error!("Failed to draw frame: {e:?}");
    }
    true
}
