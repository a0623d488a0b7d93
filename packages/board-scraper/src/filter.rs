use std::collections::HashSet;

use crate::types::Record;

/// Acceptance allow-lists for the two categorical fields. Matching is
/// exact and case-sensitive; the walker has already trimmed and
/// sentinel-defaulted the values.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    pub grad_times: HashSet<String>,
    pub hire_times: HashSet<String>,
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self {
            grad_times: [
                "2027-December",
                "2028",
                "2028-Spring",
                "2028-Summer",
                "N/A",
                "2027-Winter",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            hire_times: [
                "2026-Summer",
                "Summer",
                "2026-May",
                "2026-June",
                "2026-July",
                "N/A",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl MatchCriteria {
    /// True iff both categorical fields are members of their allow-lists.
    pub fn matches(&self, record: &Record) -> bool {
        self.grad_times.contains(&record.grad_time) && self.hire_times.contains(&record.hire_time)
    }
}

/// Narrow records to the ones satisfying the criteria, order preserved.
pub fn filter_matches(records: &[Record], criteria: &MatchCriteria) -> Vec<Record> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
