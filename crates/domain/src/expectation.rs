use crate::constants::INFREQUENT_NOTICE_WEEKS;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;

/// Forecast of the next occurrence of a recurring event.
///
/// `NoExpectation` is used for one-off and weekly events and for events
/// without any known date. It orders after every real date, so it is never
/// "before" any bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExpectedDate {
    On(NaiveDate),
    NoExpectation,
}

impl ExpectedDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::On(date) => Some(*date),
            Self::NoExpectation => None,
        }
    }
}

impl PartialEq<NaiveDate> for ExpectedDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        match self {
            Self::On(date) => date == other,
            Self::NoExpectation => false,
        }
    }
}

impl PartialOrd<NaiveDate> for ExpectedDate {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        match self {
            Self::On(date) => date.partial_cmp(other),
            Self::NoExpectation => Some(Ordering::Greater),
        }
    }
}

/// When should the occurrence after `latest_date` happen for an event
/// repeating every `frequency` weeks
pub fn expected_date(frequency: u32, latest_date: Option<NaiveDate>) -> ExpectedDate {
    match (frequency, latest_date) {
        // One-off events never repeat and weekly events are always current
        (0, _) | (1, _) => ExpectedDate::NoExpectation,
        (_, None) => ExpectedDate::NoExpectation,
        (weeks, Some(latest_date)) => latest_date
            .checked_add_signed(Duration::weeks(i64::from(weeks)))
            .map(ExpectedDate::On)
            .unwrap_or(ExpectedDate::NoExpectation),
    }
}

/// Decides whether an event should already have its next date listed
#[derive(Debug, Clone)]
pub struct DateExpectation {
    infrequent: bool,
    expected_date: ExpectedDate,
    comparison_date: NaiveDate,
}

impl DateExpectation {
    pub fn new(infrequent: bool, expected_date: ExpectedDate, comparison_date: NaiveDate) -> Self {
        Self {
            infrequent,
            expected_date,
            comparison_date,
        }
    }

    pub fn expecting_a_date(&self) -> bool {
        // Really infrequent events are not expected to have a date
        // until closer to the time
        !self.infrequent || self.expected_date_is_soon()
    }

    fn expected_date_is_soon(&self) -> bool {
        match self
            .comparison_date
            .checked_add_signed(Duration::weeks(INFREQUENT_NOTICE_WEEKS))
        {
            Some(bound) => self.expected_date < bound,
            None => false,
        }
    }
}
