//! Pure filters over a record collection.
//!
//! Every function returns a new `Vec` holding clones of the matching
//! records in their original relative order. Inputs are never modified.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::period::{DateRange, Period};
use crate::record::Record;

/// Records with a positive amount.
pub fn deposits(records: &[Record]) -> Vec<Record> {
    keep(records, Record::is_deposit)
}

/// Records with a negative amount.
pub fn payments(records: &[Record]) -> Vec<Record> {
    keep(records, Record::is_payment)
}

/// Records dated within `start..=end`.
pub fn by_date_range(records: &[Record], start: NaiveDate, end: NaiveDate) -> Vec<Record> {
    let range = DateRange::new(start, end);
    keep(records, |r| range.contains(r.date()))
}

/// Records dated within a report period relative to `today`.
pub fn by_period(records: &[Record], period: Period, today: NaiveDate) -> Vec<Record> {
    let range = period.range(today);
    by_date_range(records, range.start, range.end)
}

pub fn month_to_date(records: &[Record], today: NaiveDate) -> Vec<Record> {
    by_period(records, Period::MonthToDate, today)
}

pub fn previous_month(records: &[Record], today: NaiveDate) -> Vec<Record> {
    by_period(records, Period::PreviousMonth, today)
}

pub fn year_to_date(records: &[Record], today: NaiveDate) -> Vec<Record> {
    by_period(records, Period::YearToDate, today)
}

pub fn previous_year(records: &[Record], today: NaiveDate) -> Vec<Record> {
    by_period(records, Period::PreviousYear, today)
}

/// Records whose vendor contains `query`, ignoring case.
pub fn by_vendor(records: &[Record], query: &str) -> Vec<Record> {
    let needle = query.to_lowercase();
    keep(records, |r| r.vendor().to_lowercase().contains(&needle))
}

/// Records matching every criterion that is set.
pub fn custom_search(records: &[Record], criteria: &SearchCriteria) -> Vec<Record> {
    keep(records, |r| criteria.matches(r))
}

/// Independently optional constraints for [`custom_search`].
///
/// Text criteria are stored lowercased and compared as substrings.
/// Blank text is treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Start date (inclusive)
    pub start_date: Option<NaiveDate>,

    /// End date (inclusive)
    pub end_date: Option<NaiveDate>,

    /// Description substring, lowercased
    pub description: Option<String>,

    /// Vendor substring, lowercased
    pub vendor: Option<String>,

    /// Exact amount
    pub amount: Option<Decimal>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = normalize(text);
        self
    }

    pub fn vendor(mut self, text: &str) -> Self {
        self.vendor = normalize(text);
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// True when no criterion is set, so every record matches.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if self.start_date.is_some_and(|start| record.date() < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| record.date() > end) {
            return false;
        }
        if let Some(ref needle) = self.description {
            if !record.description().to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(ref needle) = self.vendor {
            if !record.vendor().to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        // Decimal equality ignores scale: 12.5 == 12.50
        if self.amount.is_some_and(|amount| record.amount() != amount) {
            return false;
        }
        true
    }
}

fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn keep(records: &[Record], predicate: impl Fn(&Record) -> bool) -> Vec<Record> {
    records.iter().filter(|r| predicate(*r)).cloned().collect()
}
