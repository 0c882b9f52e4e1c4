// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard configuration shared by the browser and CLI front ends.

use cohortdash_types::paths;

use crate::ranker::DEFAULT_TOP_N;
use crate::section::{Requirement, SectionId, UnknownSection};

/// Sections allowed to fail without aborting the load.
pub const DEFAULT_OPTIONAL_SECTIONS: [SectionId; 3] =
    [SectionId::Smoking, SectionId::Alcohol, SectionId::Activity];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    pub base_url: String,
    pub correlation_path: String,
    pub top_n: usize,
    pub optional_sections: Vec<SectionId>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            correlation_path: paths::CORRELATION_DIAGNOSIS.to_string(),
            top_n: DEFAULT_TOP_N,
            optional_sections: DEFAULT_OPTIONAL_SECTIONS.to_vec(),
        }
    }
}

impl DashboardConfig {
    pub fn requirement_of(&self, id: SectionId) -> Requirement {
        if self.optional_sections.contains(&id) {
            Requirement::Optional
        } else {
            Requirement::Mandatory
        }
    }
}

/// Parse a comma separated list of section keys, e.g. `"smoking, alcohol"`.
///
/// Blank entries are skipped, so an empty string yields an empty list
/// (every section mandatory).
pub fn parse_section_list(list: &str) -> Result<Vec<SectionId>, UnknownSection> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
