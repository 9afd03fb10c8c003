use chrono::NaiveTime;

/// Source of the wall-clock time shown on the face.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveTime;
}

/// Local time zone, looked up on every call so zone changes apply at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// A clock stopped at one time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: NaiveTime,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time
    }
}
