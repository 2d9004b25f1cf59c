use crate::constants::{DateMarker, DATE_FORMAT};
use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;

/// Raw date list as supplied by an organiser or a legacy record.
///
/// Text lists are comma separated `dd/mm/yyyy` dates, but may also be blank
/// or one of the `DateMarker`s. Typed lists are passed through as they are.
#[derive(Debug, Clone, PartialEq)]
pub enum DateListInput {
    Missing,
    Text(String),
    Dates(Vec<NaiveDate>),
}

impl Default for DateListInput {
    fn default() -> Self {
        Self::Missing
    }
}

impl From<&str> for DateListInput {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl From<String> for DateListInput {
    fn from(raw: String) -> Self {
        Self::Text(raw)
    }
}

impl From<DateMarker> for DateListInput {
    fn from(marker: DateMarker) -> Self {
        Self::Text(marker.as_str().to_string())
    }
}

impl From<Vec<NaiveDate>> for DateListInput {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self::Dates(dates)
    }
}

impl<T: Into<DateListInput>> From<Option<T>> for DateListInput {
    fn from(input: Option<T>) -> Self {
        match input {
            Some(input) => input.into(),
            None => Self::Missing,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseDateError {
    #[error("Invalid date: `{0}`. Dates should be written as dd/mm/yyyy")]
    Malformed(String),
}

/// Parses a single `dd/mm/yyyy` token. The year must be written with all
/// four digits, `01/02/12` is not the year 12.
pub fn parse_date(token: &str) -> Result<NaiveDate, ParseDateError> {
    let malformed = || ParseDateError::Malformed(token.to_string());
    let year = token.rsplit('/').next().ok_or_else(malformed)?;
    if year.len() != 4 {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|_| malformed())
}

/// Normalizes a raw date list into distinct dates.
///
/// The dates keep the order in which they were first seen in the input, it is
/// up to the caller to sort them. A single malformed token rejects the whole
/// list.
pub fn parse_date_list(input: &DateListInput) -> Result<Vec<NaiveDate>, ParseDateError> {
    match input {
        DateListInput::Missing => Ok(Vec::new()),
        DateListInput::Text(raw) => {
            if raw.trim().is_empty() || DateMarker::parse(raw).is_some() {
                return Ok(Vec::new());
            }
            let dates = raw
                .split(',')
                .map(|token| parse_date(token.trim()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(distinct(dates))
        }
        DateListInput::Dates(dates) => Ok(distinct(dates.clone())),
    }
}

fn distinct(dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
    let mut seen = HashSet::with_capacity(dates.len());
    dates.into_iter().filter(|date| seen.insert(*date)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "01/01/2018",
            "31/12/2025",
            "29/02/2020",
            "1/2/2012",
            "05/05/2005",
        ];

        for date in &valid_dates {
            assert!(parse_date(date).is_ok(), "{} should be valid", date);
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "",
            "2012-02-01",
            "32/01/2020",
            "30/02/2020",
            "01/13/2020",
            "00/01/2020",
            "tomorrow",
            "01/02",
            "01/02/12",
            "01/02/212",
            "01/02/20120",
        ];

        for date in &invalid_dates {
            assert_eq!(
                parse_date(date),
                Err(ParseDateError::Malformed(date.to_string()))
            );
        }
    }

    #[test]
    fn normalizes_empty_and_marker_lists_to_no_dates() {
        let inputs = vec![
            DateListInput::Missing,
            DateListInput::from(""),
            DateListInput::from("   "),
            DateListInput::from(DateMarker::UnknownDate),
            DateListInput::from(DateMarker::Weekly),
            DateListInput::from(None::<&str>),
            DateListInput::Dates(Vec::new()),
        ];

        for input in &inputs {
            assert_eq!(parse_date_list(input), Ok(Vec::new()));
        }
    }

    #[test]
    fn parses_text_lists_in_input_order() {
        let dates = parse_date_list(&"01/02/2012, 30/11/2011".into()).unwrap();
        assert_eq!(dates, vec![ymd(2012, 2, 1), ymd(2011, 11, 30)]);
    }

    #[test]
    fn trims_whitespace_around_tokens() {
        let dates = parse_date_list(&"  09/04/2011 ,14/05/2011,   11/06/2011  ".into()).unwrap();
        assert_eq!(
            dates,
            vec![ymd(2011, 4, 9), ymd(2011, 5, 14), ymd(2011, 6, 11)]
        );
    }

    #[test]
    fn removes_duplicate_dates() {
        let dates = parse_date_list(&"14/05/2011, 09/04/2011, 14/05/2011".into()).unwrap();
        assert_eq!(dates, vec![ymd(2011, 5, 14), ymd(2011, 4, 9)]);

        let typed = DateListInput::from(vec![ymd(2011, 6, 11), ymd(2011, 6, 11)]);
        assert_eq!(parse_date_list(&typed), Ok(vec![ymd(2011, 6, 11)]));
    }

    #[test]
    fn rejects_the_whole_list_when_one_token_is_malformed() {
        let at_the_end = parse_date_list(&"09/04/2011, 14/05/2011, 31/06/2011".into());
        assert_eq!(
            at_the_end,
            Err(ParseDateError::Malformed("31/06/2011".into()))
        );

        let in_the_middle = parse_date_list(&"09/04/2011, nonsense, 11/06/2011".into());
        assert_eq!(
            in_the_middle,
            Err(ParseDateError::Malformed("nonsense".into()))
        );

        let short_year = parse_date_list(&"01/02/12, 1/2/2012".into());
        assert_eq!(short_year, Err(ParseDateError::Malformed("01/02/12".into())));

        let empty_token = parse_date_list(&"09/04/2011,,11/06/2011".into());
        assert_eq!(empty_token, Err(ParseDateError::Malformed("".into())));
    }
}
