// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display names for diagnosis codes.

/// Fixed lookup from diagnosis code to display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisLabelMap {
    entries: &'static [(&'static str, &'static str)],
}

/// The process-wide map: `"0"` → `"No Dementia"`, `"1"` → `"Dementia"`.
pub const DIAGNOSIS_LABELS: DiagnosisLabelMap = DiagnosisLabelMap {
    entries: &[("0", "No Dementia"), ("1", "Dementia")],
};

impl DiagnosisLabelMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| *label)
    }

    /// Mapped label, or `code` verbatim when the map has no entry for it.
    pub fn label_for<'a>(&self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }
}

impl Default for DiagnosisLabelMap {
    fn default() -> Self {
        DIAGNOSIS_LABELS
    }
}
