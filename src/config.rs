use std::time::Duration;

/// Interval between interactive frames.
pub const UPDATE_RATE: Duration = Duration::from_millis(30);

/// Frames collected before render timings are logged.
pub const TIMING_WINDOW: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub update_rate: Duration,
    /// Self-paced redraw interval in ambient mode. `None` redraws only when
    /// the host invalidates the face.
    pub ambient_update_rate: Option<Duration>,
    pub stack_kb: Option<usize>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            update_rate: UPDATE_RATE,
            ambient_update_rate: None,
            stack_kb: None,
        }
    }
}

impl DriverConfig {
    pub fn with_update_rate(mut self, update_rate: Duration) -> Self {
        self.update_rate = update_rate;
        self
    }

    pub fn with_ambient_update_rate(mut self, ambient_update_rate: Duration) -> Self {
        self.ambient_update_rate = Some(ambient_update_rate);
        self
    }
}
