//! # pvn-core
//!
//! Narrative synthesis for pharmacovigilance case records.
//!
//! This crate turns grouped adverse-event case rows into deterministic
//! multi-paragraph narratives:
//! - Raw field values normalize to trimmed text or an explicit sentinel
//! - Lists join with natural "and" grammar
//! - Dates format as `DD-MMM-YYYY`, degrading to sentinel wording on failure
//! - Three paragraph composers assemble the final report
//!
//! **No API concerns**: HTTP serving and CLI surfaces live in the root
//! binary and `pvn-cli`. The synthesizer is a pure function of its input
//! group, so callers are free to process cases in parallel.

pub mod dates;
pub mod error;
pub mod grammar;
pub mod group;
pub mod narrative;
pub mod normalize;
pub mod patient;
pub mod validation;

pub use error::{NarrativeError, NarrativeResult};
pub use group::{group_by_case, CaseGroup};
pub use narrative::{synthesize, EMPTY_GROUP_NARRATIVE};
pub use normalize::{Normalized, UNKNOWN};

use pvn_types::{CaseNarrative, CaseRecord};

/// Pure narrative generation operations - no API concerns
#[derive(Default, Clone)]
pub struct NarrativeService;

impl NarrativeService {
    /// Creates a new instance of NarrativeService.
    pub fn new() -> Self {
        Self
    }

    /// Generates one narrative per case in a flat record batch.
    ///
    /// Records are grouped by regulatory identifier, then each group is
    /// synthesized independently via [`narratives_for_groups`].
    ///
    /// [`narratives_for_groups`]: NarrativeService::narratives_for_groups
    pub fn generate_batch(&self, records: Vec<CaseRecord>) -> Vec<CaseNarrative> {
        Self::narratives_for_groups(group::group_by_case(records))
    }

    /// Synthesizes each group in order, isolating per-case failures.
    ///
    /// A failure in one group is logged and becomes that case's
    /// placeholder narrative; it never affects sibling cases.
    pub fn narratives_for_groups(groups: Vec<CaseGroup>) -> Vec<CaseNarrative> {
        groups
            .into_iter()
            .map(|group| {
                let regulatory_id = group.regulatory_id.clone();
                let narrative = match narrative::synthesize(&group) {
                    Ok(text) => text,
                    Err(error) => {
                        tracing::error!(%regulatory_id, %error, "narrative synthesis failed");
                        format!("Error generating narrative: {error}")
                    }
                };
                CaseNarrative {
                    regulatory_id,
                    narrative,
                }
            })
            .collect()
    }

    /// Checks required-field presence for a record batch.
    ///
    /// # Returns
    /// One message per missing field, empty when the batch is valid.
    pub fn validate_batch(&self, records: &[CaseRecord]) -> Vec<String> {
        validation::validate_required_fields(records)
    }
}
