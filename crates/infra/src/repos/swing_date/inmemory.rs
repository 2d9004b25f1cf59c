use super::ISwingDateRepo;
use crate::repos::shared::inmemory_repo::lock;
use chrono::NaiveDate;
use std::collections::HashMap;
use swingout_domain::SwingDate;

pub struct InMemorySwingDateRepo {
    swing_dates: std::sync::Mutex<HashMap<NaiveDate, SwingDate>>,
}

impl InMemorySwingDateRepo {
    pub fn new() -> Self {
        Self {
            swing_dates: std::sync::Mutex::new(HashMap::new()),
        }
    }
}

impl ISwingDateRepo for InMemorySwingDateRepo {
    fn find_or_create(&self, date: NaiveDate) -> SwingDate {
        lock(&self.swing_dates)
            .entry(date)
            .or_insert_with(|| SwingDate::new(date))
            .clone()
    }

    fn find_by_date(&self, date: &NaiveDate) -> Option<SwingDate> {
        lock(&self.swing_dates).get(date).cloned()
    }

    fn count(&self) -> usize {
        lock(&self.swing_dates).len()
    }
}
