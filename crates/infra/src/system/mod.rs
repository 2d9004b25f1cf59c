use chrono::{Local, NaiveDate};

// Mocking out time so that it is possible to run tests that depend on the date.
pub trait ISys: Send + Sync {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// System that gets the real local date and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// System pinned to a single date
pub struct FixedSys {
    today: NaiveDate,
}

impl FixedSys {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl ISys for FixedSys {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
