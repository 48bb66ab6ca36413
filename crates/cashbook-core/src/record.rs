//! The ledger record and its line-delimited text form.
//!
//! A persisted line looks like:
//!
//! ```text
//! 2024-03-01|09:15:00|Paycheck|ACME Corp|2500.00
//! ```
//!
//! Fields are always date, time, description, vendor, amount, separated
//! by [`DELIMITER`]. No header row is ever written to disk.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::error::{CashbookError, Result};

/// Field separator for persisted lines.
pub const DELIMITER: char = '|';

/// Number of fields in a well-formed line.
pub const FIELD_COUNT: usize = 5;

/// Date layout for persisted lines and date prompts.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time layout for persisted lines.
pub const TIME_FORMAT: &str = "%H:%M:%S";

// Persisted dates and times are zero padded to these widths.
const DATE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 8;

/// Column names printed above rendered records. Presentation only.
pub const HEADER: &str = "date|time|description|vendor|amount";

/// A single ledger entry.
///
/// Records are immutable once built. Positive amounts are deposits,
/// negative amounts are payments, and zero is neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    date: NaiveDate,
    time: NaiveTime,
    description: String,
    vendor: String,
    amount: Decimal,
}

/// Outcome of parsing one persisted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineParse {
    /// The line held a complete record.
    Record(Record),
    /// The line did not split into [`FIELD_COUNT`] fields and carries no record.
    Skip { fields: usize },
}

/// A field of a five-field line that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    Date(String),

    #[error("invalid time {0:?} (expected HH:MM:SS)")]
    Time(String),

    #[error("invalid amount {0:?}")]
    Amount(String),
}

impl Record {
    /// Build a record, rejecting text that would corrupt the line format.
    ///
    /// The time is truncated to whole seconds so that the in-memory record
    /// equals what a later load reads back.
    ///
    /// # Errors
    ///
    /// Returns `CashbookError::Validation` if `description` or `vendor`
    /// contains the delimiter or a line break.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        description: impl Into<String>,
        vendor: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self> {
        let description = description.into();
        let vendor = vendor.into();
        ensure_storable("description", &description)?;
        ensure_storable("vendor", &vendor)?;

        Ok(Self {
            date,
            time: time.with_nanosecond(0).unwrap_or(time),
            description,
            vendor,
            amount,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_deposit(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_payment(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Serialize as one delimiter-joined line, without a trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{date}{d}{time}{d}{description}{d}{vendor}{d}{amount}",
            d = DELIMITER,
            date = self.date.format(DATE_FORMAT),
            time = self.time.format(TIME_FORMAT),
            description = self.description,
            vendor = self.vendor,
            amount = self.amount,
        )
    }

    /// Parse one persisted line.
    ///
    /// A line with the wrong number of fields yields `LineParse::Skip`.
    /// A five-field line with an unreadable date, time, or amount is an error.
    pub fn parse_line(line: &str) -> std::result::Result<LineParse, FieldError> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Ok(LineParse::Skip {
                fields: fields.len(),
            });
        }

        let date = Some(fields[0])
            .filter(|text| text.len() == DATE_WIDTH)
            .and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
            .ok_or_else(|| FieldError::Date(fields[0].to_string()))?;
        let time = Some(fields[1])
            .filter(|text| text.len() == TIME_WIDTH)
            .and_then(|text| NaiveTime::parse_from_str(text, TIME_FORMAT).ok())
            .ok_or_else(|| FieldError::Time(fields[1].to_string()))?;
        let amount =
            decimal_from_text(fields[4]).ok_or_else(|| FieldError::Amount(fields[4].to_string()))?;

        Ok(LineParse::Record(Self {
            date,
            time,
            description: fields[2].to_string(),
            vendor: fields[3].to_string(),
            amount,
        }))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Parse an amount typed by the user or read from disk.
///
/// Accepts plain decimals (`12.5`, `-3`, `+4.00`) and scientific notation
/// (`1.0E7`), which older floating-point ledger files contain.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    decimal_from_text(text.trim()).ok_or_else(|| CashbookError::MalformedAmount(text.to_string()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| CashbookError::MalformedDate(text.to_string()))
}

fn decimal_from_text(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn ensure_storable(field: &str, value: &str) -> Result<()> {
    if value.contains(DELIMITER) {
        return Err(CashbookError::Validation(format!(
            "{} cannot contain '{}'",
            field, DELIMITER
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(CashbookError::Validation(format!(
            "{} cannot contain line breaks",
            field
        )));
    }
    Ok(())
}
