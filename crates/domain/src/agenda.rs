use crate::{constants::LISTING_DAYS, event::Event};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// What is on, and what is off, on a single listed date
#[derive(Debug, Clone, Serialize)]
pub struct AgendaDate {
    pub date: NaiveDate,
    /// Events occurring on this date, in the order they were given
    pub socials: Vec<Event>,
    /// Events cancelled on this date, in the order they were given
    pub cancelled: Vec<Event>,
}

impl AgendaDate {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            socials: Vec::new(),
            cancelled: Vec::new(),
        }
    }
}

/// The days from `start` up to, but not including, `start + LISTING_DAYS`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingWindow {
    start: NaiveDate,
}

impl ListingWindow {
    pub fn starting(start: NaiveDate) -> Self {
        Self { start }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        let offset = date.signed_duration_since(self.start).num_days();
        (0..LISTING_DAYS).contains(&offset)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        (0..LISTING_DAYS)
            .filter_map(|days| self.start.checked_add_signed(Duration::days(days)))
            .collect()
    }
}

/// Every date which can be listed, starting at `today`
pub fn listing_dates(today: NaiveDate) -> Vec<NaiveDate> {
    ListingWindow::starting(today).dates()
}

/// Groups the occurrences and cancellations of `events` falling in the
/// listing window starting at `today` by date.
///
/// The returned dates are ascending and distinct. Dates without any
/// occurrence or cancellation are left out.
pub fn socials_dates(events: &[Event], today: NaiveDate) -> Vec<AgendaDate> {
    let window = ListingWindow::starting(today);
    let mut agenda: BTreeMap<NaiveDate, AgendaDate> = BTreeMap::new();

    for event in events {
        for date in event.swing_dates().iter().map(|d| d.date) {
            if window.contains(&date) {
                agenda
                    .entry(date)
                    .or_insert_with(|| AgendaDate::new(date))
                    .socials
                    .push(event.clone());
            }
        }
        for date in event.swing_cancellations().iter().map(|d| d.date) {
            if window.contains(&date) {
                agenda
                    .entry(date)
                    .or_insert_with(|| AgendaDate::new(date))
                    .cancelled
                    .push(event.clone());
            }
        }
    }

    agenda.into_iter().map(|(_, agenda_date)| agenda_date).collect()
}
