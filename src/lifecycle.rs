//! Events the host platform delivers to the watch face.

use std::sync::{Arc, Mutex};

use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// Entered (`true`) or left low-power ambient mode.
    Ambient(bool),
    /// Interruption filter now suppresses (`true`) or allows notifications.
    Muted(bool),
    Visible(bool),
}

pub trait SurfaceEvents {
    type Surface: Surface;

    /// A surface was created or replaced. Any previous surface is gone.
    fn on_surface_ready(&mut self, surface: Arc<Mutex<Self::Surface>>) -> anyhow::Result<()>;

    fn on_surface_lost(&mut self);

    fn on_mode_changed(&mut self, change: ModeChange);

    /// Periodic tick from the host, once a minute while ambient.
    fn on_time_tick(&mut self) {}
}
