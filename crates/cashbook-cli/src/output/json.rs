//! JSON output formatting for records.

use cashbook_core::present::newest_first;
use cashbook_core::{DateRange, Record};

/// Build the JSON document for a record listing, newest first.
pub fn records_json(records: &[Record], range: Option<DateRange>) -> serde_json::Value {
    let mut value = serde_json::json!({
        "count": records.len(),
        "records": newest_first(records),
    });
    if let Some(range) = range {
        value["range"] = serde_json::json!(range);
    }
    value
}
