//! Check outcomes and the per-run result table.

/// One line of output produced by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckLine {
    /// Condition met.
    Success(String),
    /// Advisory problem; does not by itself fail the check.
    Warning(String),
    /// Condition not met.
    Error(String),
    /// Suggested command or follow-up, shown under the preceding line.
    Hint(String),
    /// Sub-heading inside a section.
    Heading(String),
}

impl CheckLine {
    /// The text of the line without its kind.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(s)
            | Self::Warning(s)
            | Self::Error(s)
            | Self::Hint(s)
            | Self::Heading(s) => s,
        }
    }
}

/// What a single check produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the check passed.
    pub passed: bool,
    /// Lines to show, in order.
    pub lines: Vec<CheckLine>,
    /// Raw diagnostic output (e.g. a failing command's stderr), shown in verbose mode.
    pub detail: Option<String>,
}

impl CheckOutcome {
    /// A passing outcome with no lines yet.
    pub fn passed() -> Self {
        Self {
            passed: true,
            lines: Vec::new(),
            detail: None,
        }
    }

    /// A failing outcome with no lines yet.
    pub fn failed() -> Self {
        Self {
            passed: false,
            ..Self::passed()
        }
    }

    /// Append a line.
    pub fn line(mut self, line: CheckLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Attach diagnostic output; blank output is ignored.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if !detail.trim().is_empty() {
            self.detail = Some(detail.trim_end().to_string());
        }
        self
    }
}

/// Results of one run, keyed by check id.
///
/// Each id maps to at most one boolean; recording an id twice keeps the
/// latest value. Insertion order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    entries: Vec<(String, bool)>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for `id`.
    pub fn record(&mut self, id: &str, passed: bool) {
        match self.entries.iter_mut().find(|(k, _)| k == id) {
            Some(entry) => entry.1 = passed,
            None => self.entries.push((id.to_string(), passed)),
        }
    }

    /// Result for `id`, if it was recorded.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, v)| *v)
    }

    /// Whether `id` passed; unrecorded ids count as failed.
    pub fn passed(&self, id: &str) -> bool {
        self.get(id).unwrap_or(false)
    }

    /// Number of recorded checks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, passed)` in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_builders() {
        let outcome = CheckOutcome::failed()
            .line(CheckLine::Error("missing".to_string()))
            .detail("boom\n");

        assert!(!outcome.passed);
        assert_eq!(outcome.lines.len(), 1);
        assert_eq!(outcome.detail.as_deref(), Some("boom"));
    }

    #[test]
    fn blank_detail_ignored() {
        let outcome = CheckOutcome::passed().detail("   \n");
        assert!(outcome.detail.is_none());
    }

    #[test]
    fn line_text_strips_kind() {
        assert_eq!(CheckLine::Hint("cp a b".to_string()).text(), "cp a b");
    }

    #[test]
    fn table_records_once_per_id() {
        let mut table = ResultTable::new();
        table.record("docker", false);
        table.record("docker", true);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("docker"), Some(true));
    }

    #[test]
    fn unrecorded_id_is_not_passed() {
        let table = ResultTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("git"), None);
        assert!(!table.passed("git"));
    }

    #[test]
    fn table_preserves_order() {
        let mut table = ResultTable::new();
        table.record("gcloud", true);
        table.record("kubectl", false);
        table.record("docker", true);

        let ids: Vec<_> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["gcloud", "kubectl", "docker"]);
    }
}
