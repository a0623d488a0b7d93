use std::fmt;

/// Placeholder written into any field whose cell is empty or unreadable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Zero-based column indexes of the board grid. The mapping is fixed by the
/// hosted table and must not drift.
pub mod columns {
    pub const TITLE: u32 = 0;
    pub const POSTED_DATE: u32 = 1;
    pub const APPLY_LINK: u32 = 2;
    pub const LOCATION: u32 = 4;
    pub const COMPANY: u32 = 5;
    pub const HIRE_TIME: u32 = 6;
    pub const GRAD_TIME: u32 = 7;
    pub const SALARY: u32 = 10;
    pub const QUALIFICATIONS: u32 = 11;
}

/// The grid's own transient handle for a mounted row. Stable within one
/// walk, may be recycled by the virtualized surface over time; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowId(pub String);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One job posting as read out of the grid. Every field is trimmed and
/// sentinel-defaulted at assembly time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub apply_link: String,
    pub posted_date: String,
    pub location: String,
    pub company: String,
    pub hire_time: String,
    pub grad_time: String,
    pub salary: String,
    pub qualifications: String,
}

impl Record {
    /// Durable dedup identity: title plus company. Records sharing a key
    /// are the same posting even when other fields differ.
    pub fn posting_key(&self) -> PostingKey {
        PostingKey(format!("{}-{}", self.title, self.company))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostingKey(pub String);

impl fmt::Display for PostingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim a raw cell value, mapping absent and empty cells to the sentinel.
pub fn normalize_cell(raw: Option<String>) -> String {
    match raw {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, company: &str, location: &str) -> Record {
        Record {
            title: title.to_string(),
            apply_link: NOT_AVAILABLE.to_string(),
            posted_date: NOT_AVAILABLE.to_string(),
            location: location.to_string(),
            company: company.to_string(),
            hire_time: NOT_AVAILABLE.to_string(),
            grad_time: NOT_AVAILABLE.to_string(),
            salary: NOT_AVAILABLE.to_string(),
            qualifications: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn posting_key_ignores_everything_but_title_and_company() {
        let remote = record("SWE Intern", "Acme", "Remote");
        let onsite = record("SWE Intern", "Acme", "New York");
        assert_eq!(remote.posting_key(), onsite.posting_key());

        let other = record("SWE Intern", "Globex", "Remote");
        assert_ne!(remote.posting_key(), other.posting_key());
    }

    #[test]
    fn normalize_cell_trims_and_defaults() {
        assert_eq!(normalize_cell(Some("  Acme  ".to_string())), "Acme");
        assert_eq!(normalize_cell(Some("   ".to_string())), NOT_AVAILABLE);
        assert_eq!(normalize_cell(None), NOT_AVAILABLE);
    }
}
