//! Show-filter resolution and date parsing
//!
//! Translates the mutually exclusive `show` options into a single
//! `NoteFilter`. Filters are checked in a fixed precedence order (all, id,
//! day, month, year, date); the first one present wins. Day and month
//! filters are relative: day means that day of the current month and year,
//! month means that month of the current year.

use thiserror::Error;

/// Errors from filter resolution and date parsing
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// Date string could not be parsed
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// No filter option was given to `show`
    #[error("No filter given. Use --all, -i, --day, --month, --year, or --date.")]
    NoFilter,
}

/// Which segment order a literal date string uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `<day>/<month>/<year>` (default)
    DayFirst,
    /// `<month>/<day>/<year>` (the `--usa` flag)
    MonthFirst,
}

/// A resolved selection criterion for `show`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteFilter {
    /// Every note
    All,
    /// The note with this id
    ById(i64),
    /// Notes from this day of the current month and year
    ByDay(u32),
    /// Notes from this month of the current year
    ByMonth(u32),
    /// Notes from this year
    ByYear(i32),
    /// Notes from an exact date
    ByDate { day: u32, month: u32, year: i32 },
}

impl NoteFilter {
    /// Resolve the `show` options into a single filter
    ///
    /// Precedence: all, id, day, month, year, date. Returns
    /// `QueryError::NoFilter` when nothing is set.
    pub fn from_show_args(
        all: bool,
        id: Option<i64>,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
        date: Option<&str>,
        style: DateStyle,
    ) -> Result<Self, QueryError> {
        if all {
            return Ok(NoteFilter::All);
        }
        if let Some(id) = id {
            return Ok(NoteFilter::ById(id));
        }
        if let Some(day) = day {
            return Ok(NoteFilter::ByDay(day));
        }
        if let Some(month) = month {
            return Ok(NoteFilter::ByMonth(month));
        }
        if let Some(year) = year {
            return Ok(NoteFilter::ByYear(year));
        }
        if let Some(date) = date {
            return parse_date(date, style);
        }
        Err(QueryError::NoFilter)
    }
}

/// Parse a literal date string into a `ByDate` filter
///
/// Requires exactly three `/`-separated numeric segments and a calendar
/// date that exists; anything else is `QueryError::InvalidDate`.
pub fn parse_date(input: &str, style: DateStyle) -> Result<NoteFilter, QueryError> {
    let invalid = |reason: &str| QueryError::InvalidDate {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let segments: Vec<&str> = input.split('/').collect();
    if segments.len() != 3 {
        return Err(invalid("expected three '/'-separated fields"));
    }

    let mut numbers = [0i64; 3];
    for (i, segment) in segments.iter().enumerate() {
        numbers[i] = segment
            .trim()
            .parse()
            .map_err(|_| invalid(&format!("'{}' is not a number", segment)))?;
    }

    let (day, month, year) = match style {
        DateStyle::DayFirst => (numbers[0], numbers[1], numbers[2]),
        DateStyle::MonthFirst => (numbers[1], numbers[0], numbers[2]),
    };

    let (day, month, year) = (
        u32::try_from(day).map_err(|_| invalid("day out of range"))?,
        u32::try_from(month).map_err(|_| invalid("month out of range"))?,
        i32::try_from(year).map_err(|_| invalid("year out of range"))?,
    );

    if chrono::NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(invalid("no such calendar date"));
    }

    Ok(NoteFilter::ByDate { day, month, year })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_day_first() {
        assert_eq!(
            parse_date("01/02/2023", DateStyle::DayFirst).unwrap(),
            NoteFilter::ByDate {
                day: 1,
                month: 2,
                year: 2023
            }
        );
    }

    #[test]
    fn test_parse_date_month_first() {
        assert_eq!(
            parse_date("02/01/2023", DateStyle::MonthFirst).unwrap(),
            NoteFilter::ByDate {
                day: 1,
                month: 2,
                year: 2023
            }
        );
    }

    #[test]
    fn test_parse_date_missing_segment() {
        let err = parse_date("01/2023", DateStyle::DayFirst).unwrap_err();
        assert!(matches!(err, QueryError::InvalidDate { .. }));
    }

    #[test]
    fn test_parse_date_non_numeric() {
        let err = parse_date("first/feb/2023", DateStyle::DayFirst).unwrap_err();
        assert!(matches!(err, QueryError::InvalidDate { .. }));
    }

    #[test]
    fn test_parse_date_impossible_date() {
        let err = parse_date("31/02/2023", DateStyle::DayFirst).unwrap_err();
        assert!(matches!(err, QueryError::InvalidDate { .. }));
    }

    #[test]
    fn test_precedence_all_wins() {
        let filter = NoteFilter::from_show_args(
            true,
            Some(3),
            Some(5),
            None,
            None,
            None,
            DateStyle::DayFirst,
        )
        .unwrap();
        assert_eq!(filter, NoteFilter::All);
    }

    #[test]
    fn test_precedence_id_beats_day() {
        let filter = NoteFilter::from_show_args(
            false,
            Some(3),
            Some(5),
            None,
            None,
            None,
            DateStyle::DayFirst,
        )
        .unwrap();
        assert_eq!(filter, NoteFilter::ById(3));
    }

    #[test]
    fn test_precedence_year_beats_date() {
        let filter = NoteFilter::from_show_args(
            false,
            None,
            None,
            None,
            Some(2022),
            Some("01/02/2023"),
            DateStyle::DayFirst,
        )
        .unwrap();
        assert_eq!(filter, NoteFilter::ByYear(2022));
    }

    #[test]
    fn test_no_filter_is_an_error() {
        let err =
            NoteFilter::from_show_args(false, None, None, None, None, None, DateStyle::DayFirst)
                .unwrap_err();
        assert_eq!(err, QueryError::NoFilter);
    }
}
