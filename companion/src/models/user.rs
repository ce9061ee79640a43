use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Catalog, EventId, Interest, Skill};

/// Everything the application persists about its single user.
///
/// `skill_points[s]` always equals the number of attended events whose skill
/// list contains `s`, and `attended_event_ids` holds each id at most once, in
/// the order attendance was marked.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub selected_interests: BTreeSet<Interest>,
    pub attended_event_ids: Vec<EventId>,
    pub skill_points: BTreeMap<Skill, u32>,
}
impl UserState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn has_attended(&self, id: EventId) -> bool {
        self.attended_event_ids.contains(&id)
    }
    pub fn points(&self, skill: Skill) -> u32 {
        self.skill_points.get(&skill).copied().unwrap_or(0)
    }

    /// Recounts skill points from the attended events that still resolve in
    /// `catalog`, one point per event listing the skill.
    pub fn expected_points(&self, catalog: &Catalog) -> BTreeMap<Skill, u32> {
        let attended: Vec<_> = self
            .attended_event_ids
            .iter()
            .filter_map(|id| catalog.event(*id))
            .collect();
        catalog
            .skills()
            .iter()
            .filter_map(|skill| {
                let count = attended.iter().filter(|e| e.trains(*skill)).count();
                let count = u32::try_from(count).unwrap_or(u32::MAX);
                (count > 0).then_some((*skill, count))
            })
            .collect()
    }

    /// Drops repeated attendance ids and rebuilds the skill points from
    /// attendance. Returns whether anything changed.
    pub fn normalize(&mut self, catalog: &Catalog) -> bool {
        let mut seen = BTreeSet::new();
        let before = self.attended_event_ids.len();
        self.attended_event_ids.retain(|id| seen.insert(*id));
        let expected = self.expected_points(catalog);
        let changed = before != self.attended_event_ids.len() || expected != self.skill_points;
        self.skill_points = expected;
        changed
    }
}
