use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of days, starting today, shown in the socials listing
pub const LISTING_DAYS: i64 = 14;

/// Infrequent events are only expected to have their next date listed
/// once the forecast falls within this many weeks
pub const INFREQUENT_NOTICE_WEEKS: i64 = 6;

/// Textual format of legacy date lists: day/month/year
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Days of the week starting Monday
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Markers an organiser can put in place of a date list.
/// Neither of them is a date, so they both normalize to "no dates".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateMarker {
    UnknownDate,
    Weekly,
}

impl DateMarker {
    pub const ALL: [DateMarker; 2] = [DateMarker::UnknownDate, DateMarker::Weekly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownDate => "Unknown",
            Self::Weekly => "Weekly",
        }
    }

    /// Matches a raw date list against the known markers, ignoring case
    /// and surrounding whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|marker| marker.as_str().eq_ignore_ascii_case(raw))
    }
}

impl Display for DateMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

pub fn weekday_name(date: &NaiveDate) -> &'static str {
    day_name(date.weekday())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recognizes_markers_regardless_of_case_and_padding() {
        assert_eq!(DateMarker::parse("Unknown"), Some(DateMarker::UnknownDate));
        assert_eq!(DateMarker::parse(" weekly "), Some(DateMarker::Weekly));
        assert_eq!(DateMarker::parse("WEEKLY"), Some(DateMarker::Weekly));
        assert_eq!(DateMarker::parse("01/02/2012"), None);
        assert_eq!(DateMarker::parse(""), None);
    }

    #[test]
    fn names_weekdays_starting_monday() {
        assert_eq!(DAY_NAMES[0], "Monday");
        assert_eq!(DAY_NAMES[6], "Sunday");
        // 11th October 2012 was a Thursday
        let date = NaiveDate::from_ymd_opt(2012, 10, 11).unwrap();
        assert_eq!(weekday_name(&date), "Thursday");
        assert_eq!(day_name(Weekday::Fri), "Friday");
    }
}
