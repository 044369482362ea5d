//! Usage analytics aggregation
//!
//! Pure tallies over already-loaded rows: totals plus exact-match breakdowns
//! by interaction type and by subject. Ordered maps keep the serialized
//! output stable between runs.

use crate::db::models::{StudyMaterial, UserInteraction};
use crate::subject::SubjectTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated usage counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub total_materials: i64,
    pub total_interactions: i64,
    /// Count per interaction type label (exact string match)
    pub interactions_by_type: BTreeMap<String, i64>,
    /// Count per subject tag
    pub materials_by_subject: BTreeMap<SubjectTag, i64>,
}

/// Tally materials and interactions into a [`StatsReport`].
///
/// Breakdown keys are taken from the rows as-is; nothing is normalized or
/// merged, so "view" and "View" would count separately.
pub fn compute_stats(
    materials: &[StudyMaterial],
    interactions: &[UserInteraction],
) -> StatsReport {
    let mut report = StatsReport {
        total_materials: materials.len() as i64,
        total_interactions: interactions.len() as i64,
        ..Default::default()
    };

    for material in materials {
        *report
            .materials_by_subject
            .entry(material.subject)
            .or_insert(0) += 1;
    }
    for interaction in interactions {
        *report
            .interactions_by_type
            .entry(interaction.interaction_type.clone())
            .or_insert(0) += 1;
    }

    report
}
