//! The ledger: the in-memory record collection bound to its backend.

use tracing::{debug, warn};

use super::traits::Backend;
use super::types::{LoadPolicy, LoadReport};
use crate::error::{CashbookError, Result};
use crate::record::{LineParse, Record};

/// Records read from a backend, plus what was dropped along the way.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub records: Vec<Record>,
    pub report: LoadReport,
}

/// Parse every line of `backend` into records.
///
/// Lines without exactly five fields are skipped and counted. A five-field
/// line with a bad date, time, or amount either aborts the load
/// (`LoadPolicy::Strict`) or is skipped and counted (`LoadPolicy::Lenient`).
///
/// # Errors
///
/// Returns `CashbookError::Storage` if the backend cannot be read, and
/// `CashbookError::MalformedRecord` for a bad line under the strict policy.
pub fn load<B: Backend + ?Sized>(backend: &B, policy: LoadPolicy) -> Result<Loaded> {
    let lines = backend.read_lines()?;
    let mut loaded = Loaded {
        records: Vec::with_capacity(lines.len()),
        report: LoadReport::default(),
    };

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        match Record::parse_line(line) {
            Ok(LineParse::Record(record)) => {
                loaded.records.push(record);
                loaded.report.loaded += 1;
            }
            Ok(LineParse::Skip { fields }) => {
                debug!(line = line_number, fields, "skipping line with wrong field count");
                loaded.report.skipped += 1;
            }
            Err(err) => match policy {
                LoadPolicy::Strict => {
                    return Err(CashbookError::MalformedRecord {
                        line: line_number,
                        reason: err.to_string(),
                    })
                }
                LoadPolicy::Lenient => {
                    warn!(line = line_number, error = %err, "rejecting malformed line");
                    loaded.report.rejected += 1;
                }
            },
        }
    }

    debug!(
        source = %backend.describe(),
        loaded = loaded.report.loaded,
        skipped = loaded.report.skipped,
        rejected = loaded.report.rejected,
        "ledger loaded"
    );
    Ok(loaded)
}

/// Every record of one ledger, owned for the length of a session.
///
/// The backend is the durable source of truth across restarts; the
/// in-memory collection mirrors it and serves all queries.
#[derive(Debug)]
pub struct Ledger<B: Backend> {
    backend: B,
    records: Vec<Record>,
    report: LoadReport,
}

impl<B: Backend> Ledger<B> {
    /// Load all records from `backend`.
    ///
    /// # Errors
    ///
    /// See [`load`].
    pub fn open(backend: B, policy: LoadPolicy) -> Result<Self> {
        let Loaded { records, report } = load(&backend, policy)?;
        Ok(Self {
            backend,
            records,
            report,
        })
    }

    /// A ledger over `backend` holding no records, for when loading failed.
    ///
    /// Appends still go to the backend.
    pub fn empty(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
            report: LoadReport::default(),
        }
    }

    /// All records, in the order they were stored.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Durably store `record`, then add it to the in-memory collection.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write failed. The in-memory
    /// collection is left unchanged in that case.
    pub fn append(&mut self, record: Record) -> Result<&Record> {
        self.backend.append_line(&record.to_line())?;
        debug!(destination = %self.backend.describe(), line = %record, "record appended");
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    fn record(amount: i64) -> Record {
        Record::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            "Lunch",
            "Cafe",
            Decimal::new(amount, 2),
        )
        .unwrap()
    }

    #[test]
    fn test_open_empty_backend() {
        let ledger = Ledger::open(MemoryBackend::new(), LoadPolicy::Strict).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(*ledger.load_report(), LoadReport::default());
    }

    #[test]
    fn test_load_counts_skipped_lines() {
        let backend = MemoryBackend::with_lines([
            "2024-05-01|12:00:00|Lunch|Cafe|-12.50",
            "",
            "garbage",
            "2024-05-02|08:00:00|Pay|ACME|100",
        ]);
        let ledger = Ledger::open(backend, LoadPolicy::Strict).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(
            *ledger.load_report(),
            LoadReport {
                loaded: 2,
                skipped: 2,
                rejected: 0
            }
        );
    }

    #[test]
    fn test_strict_load_aborts_on_bad_date() {
        let backend = MemoryBackend::with_lines([
            "2024-05-01|12:00:00|Lunch|Cafe|-12.50",
            "2024-05-xx|12:00:00|Lunch|Cafe|-12.50",
            "2024-05-03|12:00:00|Lunch|Cafe|-12.50",
        ]);
        let err = Ledger::open(backend, LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, CashbookError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_lenient_load_skips_bad_date() {
        let backend = MemoryBackend::with_lines([
            "2024-05-01|12:00:00|Lunch|Cafe|-12.50",
            "2024-05-xx|12:00:00|Lunch|Cafe|-12.50",
            "2024-05-03|12:00:00|Lunch|Cafe|-12.50",
        ]);
        let ledger = Ledger::open(backend, LoadPolicy::Lenient).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.load_report().rejected, 1);
    }

    #[test]
    fn test_append_writes_then_keeps_record() {
        let mut ledger = Ledger::open(MemoryBackend::new(), LoadPolicy::Strict).unwrap();
        let stored = ledger.append(record(-1250)).unwrap().clone();

        assert_eq!(ledger.records(), [stored.clone()]);
        assert_eq!(ledger.backend().lines(), [stored.to_line()]);
    }

    #[test]
    fn test_failed_append_leaves_collection_unchanged() {
        let backend = MemoryBackend::with_lines(["2024-05-01|12:00:00|Lunch|Cafe|-12.50"])
            .failing_writes();
        let mut ledger = Ledger::open(backend, LoadPolicy::Strict).unwrap();

        assert!(ledger.append(record(500)).is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_strict_load_rejects_unpadded_fields() {
        let backend = MemoryBackend::with_lines(["2024-1-5|9:5:0|a|b|1"]);
        let err = Ledger::open(backend, LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, CashbookError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_empty_ledger_still_appends() {
        let backend = MemoryBackend::with_lines(["2024-05-01|12:00:00|Lunch|Cafe|-12.50"]);
        let mut ledger = Ledger::empty(backend);
        assert!(ledger.is_empty());

        ledger.append(record(500)).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.backend().lines().len(), 2);
    }

    #[test]
    fn test_reopen_sees_appended_records() {
        let mut ledger = Ledger::open(MemoryBackend::new(), LoadPolicy::Strict).unwrap();
        ledger.append(record(500)).unwrap();
        ledger.append(record(-200)).unwrap();

        let reopened = Ledger::open(ledger.backend().clone(), LoadPolicy::Strict).unwrap();
        assert_eq!(reopened.records(), ledger.records());
    }
}
