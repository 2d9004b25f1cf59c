use crate::{
    constants::LISTING_DAYS,
    expectation::{expected_date, DateExpectation, ExpectedDate},
    organiser::Organiser,
    shared::entity::{Entity, ID},
    swing_date::SwingDate,
};
use chrono::{Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// A class, social or taster series listed on the site
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: ID,
    pub title: String,
    /// Weeks between occurrences. 0 is a one-off event and 1 is weekly.
    pub frequency: u32,
    pub infrequent: bool,
    pub has_class: bool,
    pub has_social: bool,
    pub has_taster: bool,
    /// Day of the week for weekly classes
    pub day: Option<Weekday>,
    pub venue_id: Option<ID>,
    pub class_organiser: Option<Organiser>,
    /// Classes are no longer listed after this date
    pub last_date: Option<NaiveDate>,
    /// Sorted by date, no duplicates
    dates: Vec<SwingDate>,
    /// In the order they were given, no duplicates
    cancellations: Vec<SwingDate>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventValidationError {
    #[error("The event must have a class or a social")]
    NoClassOrSocial,
    #[error("The event must have a venue")]
    MissingVenue,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("Tried to get class-related info from event: {0} which has no class")]
    NotAClass(ID),
    #[error("Invalid organiser: {0}, the name was blank")]
    BlankOrganiserName(ID),
}

/// How up to date the listed dates of an event are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// The event has ended, or it is a one-off whose date has passed
    Inactive,
    /// A next date should be listed by now, but none is
    OutOfDate,
    /// Will be out of date before the current listing window is over
    NearOutOfDate,
    Current,
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Event {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            title: title.into(),
            frequency: 0,
            infrequent: false,
            has_class: false,
            has_social: false,
            has_taster: false,
            day: None,
            venue_id: None,
            class_organiser: None,
            last_date: None,
            dates: Vec::new(),
            cancellations: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        // A taster on its own is not something people can attend
        if !self.has_class && !self.has_social {
            return Err(EventValidationError::NoClassOrSocial);
        }
        if self.venue_id.is_none() {
            return Err(EventValidationError::MissingVenue);
        }
        Ok(())
    }

    /// Replaces every occurrence of this event
    pub fn set_dates(&mut self, mut dates: Vec<SwingDate>) {
        dates.sort_by_key(|d| d.date);
        dates.dedup_by_key(|d| d.date);
        self.dates = dates;
    }

    pub fn add_date(&mut self, date: SwingDate) {
        if let Err(pos) = self.dates.binary_search_by_key(&date.date, |d| d.date) {
            self.dates.insert(pos, date);
        }
    }

    /// Replaces every cancellation of this event. Unlike the occurrences
    /// the cancellations keep the order they were given in.
    pub fn set_cancellations(&mut self, cancellations: Vec<SwingDate>) {
        let mut seen = HashSet::with_capacity(cancellations.len());
        self.cancellations = cancellations
            .into_iter()
            .filter(|d| seen.insert(d.date))
            .collect();
    }

    pub fn add_cancellation(&mut self, date: SwingDate) {
        if !self.is_cancelled_on(&date.date) {
            self.cancellations.push(date);
        }
    }

    pub fn swing_dates(&self) -> &[SwingDate] {
        &self.dates
    }

    pub fn swing_cancellations(&self) -> &[SwingDate] {
        &self.cancellations
    }

    /// Occurrence dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.dates.iter().map(|d| d.date).collect()
    }

    /// Cancelled dates in the order they were given
    pub fn cancellations(&self) -> Vec<NaiveDate> {
        self.cancellations.iter().map(|d| d.date).collect()
    }

    pub fn is_cancelled_on(&self, date: &NaiveDate) -> bool {
        self.cancellations.iter().any(|d| d.date == *date)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().map(|d| d.date)
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().map(|d| d.date)
    }

    /// The first date is on or before `today`
    pub fn has_started(&self, today: NaiveDate) -> bool {
        matches!(self.first_date(), Some(first) if first <= today)
    }

    pub fn has_date_on_or_after(&self, date: NaiveDate) -> bool {
        matches!(self.latest_date(), Some(latest) if latest >= date)
    }

    pub fn is_one_off(&self) -> bool {
        self.frequency == 0
    }

    pub fn is_weekly(&self) -> bool {
        self.frequency == 1
    }

    pub fn has_ended(&self, today: NaiveDate) -> bool {
        matches!(self.last_date, Some(last_date) if last_date < today)
    }

    pub fn is_active_class(&self, today: NaiveDate) -> bool {
        self.has_class && !self.has_ended(today)
    }

    pub fn expected_date(&self) -> ExpectedDate {
        expected_date(self.frequency, self.latest_date())
    }

    /// Should this event already have its next date listed
    pub fn is_date_expected_soon(&self, today: NaiveDate) -> bool {
        DateExpectation::new(self.infrequent, self.expected_date(), today).expecting_a_date()
    }

    /// Nothing is listed from `date` onwards although a date is expected.
    /// Weekly events are never out of date, one-offs are as soon as their
    /// last date has passed.
    pub fn is_out_of_date(&self, date: NaiveDate) -> bool {
        if self.is_weekly() || self.has_date_on_or_after(date) {
            return false;
        }
        self.is_one_off() || self.is_date_expected_soon(date)
    }

    /// Not out of date yet, but will be by the end of the listing window
    /// starting at `today`. One-offs have no next date to list, so they go
    /// straight from current to inactive.
    pub fn is_near_out_of_date(&self, today: NaiveDate) -> bool {
        !self.is_one_off()
            && !self.is_out_of_date(today)
            && self.is_out_of_date(today + Duration::days(LISTING_DAYS))
    }

    pub fn schedule_status(&self, today: NaiveDate) -> ScheduleStatus {
        let out_of_date = self.is_out_of_date(today);
        if self.has_ended(today) || (out_of_date && self.is_one_off()) {
            ScheduleStatus::Inactive
        } else if out_of_date {
            ScheduleStatus::OutOfDate
        } else if self.is_near_out_of_date(today) {
            ScheduleStatus::NearOutOfDate
        } else {
            ScheduleStatus::Current
        }
    }

    /// Organiser to credit in class listings
    pub fn class_organiser(&self) -> Result<Option<&Organiser>, InvariantViolation> {
        if !self.has_class && !self.has_taster {
            return Err(InvariantViolation::NotAClass(self.id.clone()));
        }
        match &self.class_organiser {
            None => Ok(None),
            Some(organiser) if organiser.has_blank_name() => Err(
                InvariantViolation::BlankOrganiserName(organiser.id.clone()),
            ),
            Some(organiser) => Ok(Some(organiser)),
        }
    }
}
