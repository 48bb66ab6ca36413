//! Parsing helpers for output format and search criteria.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use cashbook_core::record::{parse_amount, parse_date};
use cashbook_core::{Result, SearchCriteria};

use crate::errors::CliError;
use crate::ui::OutputFormat;

/// Parse `--format` (table or plain).
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse a date that may be left blank.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(text) => parse_date(text).map(Some),
        None => Ok(None),
    }
}

/// Parse an amount that may be left blank.
pub fn parse_optional_amount(value: Option<&str>) -> Result<Option<Decimal>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(text) => parse_amount(text).map(Some),
        None => Ok(None),
    }
}

/// Raw text of each custom-search criterion, as typed or passed as flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct CriteriaInput<'a> {
    pub since: Option<&'a str>,
    pub until: Option<&'a str>,
    pub description: Option<&'a str>,
    pub vendor: Option<&'a str>,
    pub amount: Option<&'a str>,
}

/// Build search criteria, treating blank values as unset.
pub fn build_criteria(input: CriteriaInput<'_>) -> Result<SearchCriteria> {
    let mut criteria = SearchCriteria::new()
        .description(input.description.unwrap_or_default())
        .vendor(input.vendor.unwrap_or_default());
    if let Some(date) = parse_optional_date(input.since)? {
        criteria = criteria.since(date);
    }
    if let Some(date) = parse_optional_date(input.until)? {
        criteria = criteria.until(date);
    }
    if let Some(amount) = parse_optional_amount(input.amount)? {
        criteria = criteria.amount(amount);
    }
    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashbook_core::CashbookError;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("TABLE")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let criteria = build_criteria(CriteriaInput {
            since: Some(""),
            until: Some("  "),
            description: Some(""),
            vendor: None,
            amount: Some(""),
        })
        .unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_build_criteria_parses_values() {
        let criteria = build_criteria(CriteriaInput {
            since: Some("2024-01-01"),
            vendor: Some("Shop"),
            amount: Some("-12.50"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(criteria.vendor.as_deref(), Some("shop"));
        assert_eq!(criteria.amount, Some(Decimal::new(-1250, 2)));
    }

    #[test]
    fn test_build_criteria_rejects_bad_date() {
        let err = build_criteria(CriteriaInput {
            until: Some("yesterday"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, CashbookError::MalformedDate(_)));
    }
}
