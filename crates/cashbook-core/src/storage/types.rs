//! Types describing how a ledger was loaded.

use serde::{Deserialize, Serialize};

/// What to do with a five-field line whose date, time, or amount is unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Abort the whole load on the first bad line.
    #[default]
    Strict,
    /// Skip the bad line, count it, and keep going.
    Lenient,
}

/// Line counts gathered while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadReport {
    /// Records parsed and kept
    pub loaded: usize,

    /// Lines without exactly five fields (blank lines included)
    pub skipped: usize,

    /// Five-field lines dropped under `LoadPolicy::Lenient`
    pub rejected: usize,
}

impl LoadReport {
    /// Total lines that did not become records.
    pub fn dropped(&self) -> usize {
        self.skipped + self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(LoadPolicy::default(), LoadPolicy::Strict);
    }

    #[test]
    fn test_policy_names() {
        let policy: LoadPolicy = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(policy, LoadPolicy::Lenient);
    }

    #[test]
    fn test_dropped_sums_skipped_and_rejected() {
        let report = LoadReport {
            loaded: 4,
            skipped: 2,
            rejected: 1,
        };
        assert_eq!(report.dropped(), 3);
    }
}
