pub mod clock;
pub mod config;
pub mod driver;
pub mod lifecycle;
pub mod settings;
pub mod surface;
pub mod threads;
pub mod timings;

pub use driver::FrameDriver;
pub use lifecycle::{ModeChange, SurfaceEvents};
pub use settings::SettingsStore;
pub use surface::{MemorySurface, Surface};
