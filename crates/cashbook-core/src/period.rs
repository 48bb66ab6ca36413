//! Inclusive date ranges and the named report periods built on them.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when `start <= date <= end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Report periods relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    MonthToDate,
    PreviousMonth,
    YearToDate,
    PreviousYear,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::MonthToDate,
        Period::PreviousMonth,
        Period::YearToDate,
        Period::PreviousYear,
    ];

    /// Resolve the period to concrete dates.
    pub fn range(self, today: NaiveDate) -> DateRange {
        match self {
            Period::MonthToDate => DateRange::new(first_of_month(today), today),
            Period::PreviousMonth => {
                let end = first_of_month(today) - Duration::days(1);
                DateRange::new(first_of_month(end), end)
            }
            Period::YearToDate => DateRange::new(first_of_year(today), today),
            Period::PreviousYear => {
                let end = first_of_year(today) - Duration::days(1);
                DateRange::new(first_of_year(end), end)
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Period::MonthToDate => "Month To Date",
            Period::PreviousMonth => "Previous Month",
            Period::YearToDate => "Year To Date",
            Period::PreviousYear => "Previous Year",
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}
