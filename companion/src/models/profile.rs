//! Pure derivations of everything a view shows.
//!
//! None of these functions keep state between calls; they are cheap enough to
//! recompute on every render, callers decide whether to memoize.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use super::{Catalog, Event, EventId, Interest, Skill, SkillLevel};

/// Bullet shown instead of an empty resume.
pub const RESUME_PLACEHOLDER: &str = "Participated in college events to build technical and soft skills (track details as you attend).";
/// Shown when the selected interests filter out every event.
pub const NO_MATCHING_EVENTS: &str =
    "No events match your interests right now. Try selecting more interests.";
/// Shown when no skill has any points yet.
pub const NO_SKILLS_TRACKED: &str = "No skills tracked yet. Attend events to see your growth here.";

/// A skill with points, as listed in the skill profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub skill: Skill,
    pub points: u32,
    pub level: SkillLevel,
}
impl Display for SkillEntry {
    /// Formats the level column, e.g. `Intermediate (3× activity)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}× activity)", self.level, self.points)
    }
}

/// Events to show for the selected interests, in catalog order.
///
/// An empty selection means no filter at all, not "match nothing".
pub fn visible_events<'a>(catalog: &'a Catalog, selected: &BTreeSet<Interest>) -> Vec<&'a Event> {
    catalog
        .events()
        .iter()
        .filter(|e| selected.is_empty() || selected.contains(&e.interest))
        .collect()
}

pub fn skill_level(points: u32) -> SkillLevel {
    SkillLevel::from_points(points)
}

/// The skills with at least one point, in the order of `skills`.
pub fn skill_profile(skills: &[Skill], points: &BTreeMap<Skill, u32>) -> Vec<SkillEntry> {
    skills
        .iter()
        .filter_map(|skill| {
            let points = points.get(skill).copied().unwrap_or(0);
            (points > 0).then(|| SkillEntry {
                skill: *skill,
                points,
                level: skill_level(points),
            })
        })
        .collect()
}

/// One sentence per attended event, in attendance order.
///
/// Ids missing from `catalog` are skipped. With nothing attended the result
/// is the single [`RESUME_PLACEHOLDER`].
pub fn resume_bullets(attended: &[EventId], catalog: &Catalog) -> Vec<String> {
    if attended.is_empty() {
        return vec![String::from(RESUME_PLACEHOLDER)];
    }
    attended
        .iter()
        .filter_map(|id| catalog.event(*id))
        .map(resume_bullet)
        .collect()
}

fn resume_bullet(event: &Event) -> String {
    let skills = event
        .skills
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Participated in \"{}\" {} event, strengthening {}.",
        event.title,
        event.interest.name().to_lowercase(),
        skills
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventBuilder;

    #[test]
    fn empty_selection_shows_everything() {
        let catalog = Catalog::campus();
        let visible = visible_events(&catalog, &BTreeSet::new());
        let ids: Vec<_> = visible.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn selection_filters_in_catalog_order() {
        let catalog = Catalog::campus();
        let selected = BTreeSet::from([Interest::Entrepreneurship, Interest::Arts]);
        let ids: Vec<_> = visible_events(&catalog, &selected)
            .iter()
            .map(|e| e.id.0)
            .collect();
        assert_eq!(ids, [2, 6]);
    }

    #[test]
    fn selection_without_events_is_empty() {
        let only_arts = EventBuilder::new(EventId(1), "Gallery", Interest::Arts)
            .skill(Skill::Creativity)
            .build();
        let catalog = Catalog::new([only_arts]).unwrap();
        let selected = BTreeSet::from([Interest::Sports]);
        assert!(visible_events(&catalog, &selected).is_empty());
    }

    #[test]
    fn profile_skips_zero_points_and_keeps_catalog_order() {
        let points = BTreeMap::from([
            (Skill::Confidence, 6),
            (Skill::Teamwork, 3),
            (Skill::Leadership, 0),
            (Skill::TechnicalAbility, 1),
        ]);
        let profile = skill_profile(&Skill::ALL, &points);
        let skills: Vec<_> = profile.iter().map(|e| e.skill).collect();
        assert_eq!(
            skills,
            [Skill::TechnicalAbility, Skill::Teamwork, Skill::Confidence]
        );
        assert_eq!(profile[0].level, SkillLevel::Beginner);
        assert_eq!(profile[1].level, SkillLevel::Intermediate);
        assert_eq!(profile[2].level, SkillLevel::Advanced);
    }

    #[test]
    fn entry_label() {
        let entry = SkillEntry {
            skill: Skill::Teamwork,
            points: 3,
            level: SkillLevel::Intermediate,
        };
        assert_eq!(entry.to_string(), "Intermediate (3× activity)");
    }

    #[test]
    fn resume_placeholder_when_nothing_attended() {
        let bullets = resume_bullets(&[], &Catalog::campus());
        assert_eq!(bullets, [RESUME_PLACEHOLDER]);
    }

    #[test]
    fn resume_bullet_wording() {
        let bullets = resume_bullets(&[EventId(5)], &Catalog::campus());
        assert_eq!(
            bullets,
            ["Participated in \"Cultural Fest: Roots & Rhythms\" cultural activities event, \
              strengthening Creativity, Event Management, Collaboration."]
        );
    }

    #[test]
    fn resume_skips_unknown_ids() {
        let bullets = resume_bullets(&[EventId(77), EventId(2)], &Catalog::campus());
        assert_eq!(bullets.len(), 1);
        assert!(bullets[0].contains("Drama & Theatre Night"));
    }

    #[test]
    fn resume_with_only_unknown_ids_is_empty() {
        assert!(resume_bullets(&[EventId(77)], &Catalog::campus()).is_empty());
    }
}
