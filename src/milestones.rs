//! Developmental milestone checklist
//!
//! A fixed catalogue of milestones per age band, a set of checked
//! milestones and the badge awarded once rolling over and sitting
//! unsupported have both been checked.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::AgeGroup;

/// Milestones expected in each age band
pub const MILESTONES: &[(AgeGroup, &[&str])] = &[
    (AgeGroup::Newborn, &["Lifts head slightly", "Responds to sound"]),
    (AgeGroup::TwoToThreeMonths, &["Smiles at people", "Follows movement"]),
    (AgeGroup::FourToSixMonths, &["Rolls over", "Begins to babble"]),
    (AgeGroup::SevenToNineMonths, &["Sits without support", "Responds to own name"]),
];

/// Milestones that together unlock the badge
pub const BADGE_MILESTONES: [(AgeGroup, &str); 2] = [
    (AgeGroup::FourToSixMonths, "Rolls over"),
    (AgeGroup::SevenToNineMonths, "Sits without support"),
];

/// Milestones listed for an age band; empty for bands without any
#[must_use]
pub fn milestones_for(group: AgeGroup) -> &'static [&'static str] {
    MILESTONES
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, tasks)| *tasks)
        .unwrap_or(&[])
}

/// Set of checked milestones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneChecklist {
    checked: BTreeSet<String>,
}

impl MilestoneChecklist {
    /// Empty checklist
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(group: AgeGroup, task: &str) -> String {
        format!("{}:{task}", group.label())
    }

    /// Flip a milestone, returning whether it is now checked
    pub fn toggle(&mut self, group: AgeGroup, task: &str) -> bool {
        let key = Self::key(group, task);
        if self.checked.remove(&key) {
            false
        } else {
            self.checked.insert(key);
            true
        }
    }

    /// Whether a milestone is checked
    #[must_use]
    pub fn is_checked(&self, group: AgeGroup, task: &str) -> bool {
        self.checked.contains(&Self::key(group, task))
    }

    /// Number of checked milestones
    #[must_use]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Whether nothing is checked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Whether the badge milestones are all checked
    #[must_use]
    pub fn has_badge(&self) -> bool {
        BADGE_MILESTONES
            .iter()
            .all(|(group, task)| self.is_checked(*group, task))
    }
}
