mod event;
mod shared;
mod swing_date;

pub use event::{IEventRepo, InMemoryEventRepo};
use std::sync::Arc;
pub use swing_date::{ISwingDateRepo, InMemorySwingDateRepo};

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub swing_dates: Arc<dyn ISwingDateRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            swing_dates: Arc::new(InMemorySwingDateRepo::new()),
        }
    }
}
