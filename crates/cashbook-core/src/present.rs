//! Sorting and plain-text rendering of record collections.

use std::io::{self, Write};

use crate::record::{Record, HEADER};

/// Shown instead of a header and rows when there is nothing to list.
pub const EMPTY_MESSAGE: &str = "No transactions found.";

/// A copy of `records`, newest date first and latest time first within a date.
///
/// Records sharing both date and time keep their relative input order.
pub fn newest_first(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| (b.date(), b.time()).cmp(&(a.date(), a.time())));
    sorted
}

/// Write `records` as a header line followed by one line per record.
///
/// An empty collection writes only [`EMPTY_MESSAGE`].
pub fn render<W: Write + ?Sized>(out: &mut W, records: &[Record]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{}", EMPTY_MESSAGE);
    }
    writeln!(out, "{}", HEADER)?;
    for record in newest_first(records) {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Render into a `String`.
pub fn render_to_string(records: &[Record]) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = render(&mut buffer, records);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    fn rec(date: (i32, u32, u32), time: (u32, u32, u32), description: &str) -> Record {
        Record::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(time.0, time.1, time.2).unwrap(),
            description,
            "Vendor",
            Decimal::new(100, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_to_string(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_render_header_and_rows() {
        let records = vec![rec((2024, 1, 1), (9, 0, 0), "Only")];
        assert_eq!(
            render_to_string(&records),
            "date|time|description|vendor|amount\n2024-01-01|09:00:00|Only|Vendor|100\n"
        );
    }

    #[test]
    fn test_same_day_later_time_first() {
        let records = vec![
            rec((2024, 1, 1), (9, 0, 0), "morning"),
            rec((2024, 1, 1), (17, 0, 0), "evening"),
        ];
        let output = render_to_string(&records);
        let evening = output.find("evening").unwrap();
        let morning = output.find("morning").unwrap();
        assert!(evening < morning);
    }

    #[test]
    fn test_newest_first_orders_by_date_then_time() {
        let records = vec![
            rec((2023, 12, 31), (23, 0, 0), "a"),
            rec((2024, 1, 2), (8, 0, 0), "b"),
            rec((2024, 1, 1), (12, 0, 0), "c"),
            rec((2024, 1, 2), (7, 0, 0), "d"),
        ];
        let order: Vec<String> = newest_first(&records)
            .iter()
            .map(|r| r.description().to_string())
            .collect();
        assert_eq!(order, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_identical_timestamps_keep_input_order() {
        let records = vec![
            rec((2024, 1, 1), (9, 0, 0), "first"),
            rec((2024, 1, 1), (9, 0, 0), "second"),
        ];
        let sorted = newest_first(&records);
        assert_eq!(sorted[0].description(), "first");
        assert_eq!(sorted[1].description(), "second");
    }

    #[test]
    fn test_newest_first_does_not_modify_input() {
        let records = vec![
            rec((2024, 1, 1), (9, 0, 0), "old"),
            rec((2024, 2, 1), (9, 0, 0), "new"),
        ];
        let _ = newest_first(&records);
        assert_eq!(records[0].description(), "old");
    }
}
