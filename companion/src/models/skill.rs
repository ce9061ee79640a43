use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// A competency that events train and attendance accumulates points for.
///
/// Variant order is the catalog order the skill profile is listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Skill {
    TechnicalAbility,
    Teamwork,
    Leadership,
    Communication,
    Creativity,
    ProblemSolving,
    EventManagement,
    AnalyticalThinking,
    Discipline,
    Resilience,
    Collaboration,
    StrategicThinking,
    Confidence,
}

impl Skill {
    /// Every skill, in catalog order.
    pub const ALL: [Skill; 13] = [
        Skill::TechnicalAbility,
        Skill::Teamwork,
        Skill::Leadership,
        Skill::Communication,
        Skill::Creativity,
        Skill::ProblemSolving,
        Skill::EventManagement,
        Skill::AnalyticalThinking,
        Skill::Discipline,
        Skill::Resilience,
        Skill::Collaboration,
        Skill::StrategicThinking,
        Skill::Confidence,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Skill::TechnicalAbility => "Technical Ability",
            Skill::Teamwork => "Teamwork",
            Skill::Leadership => "Leadership",
            Skill::Communication => "Communication",
            Skill::Creativity => "Creativity",
            Skill::ProblemSolving => "Problem Solving",
            Skill::EventManagement => "Event Management",
            Skill::AnalyticalThinking => "Analytical Thinking",
            Skill::Discipline => "Discipline",
            Skill::Resilience => "Resilience",
            Skill::Collaboration => "Collaboration",
            Skill::StrategicThinking => "Strategic Thinking",
            Skill::Confidence => "Confidence",
        }
    }
}

impl Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.name() == s)
            .ok_or_else(|| ParseNameError {
                kind: "skill",
                name: s.to_owned(),
            })
    }
}

impl From<Skill> for String {
    fn from(skill: Skill) -> Self {
        skill.name().to_owned()
    }
}

impl TryFrom<String> for Skill {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Three-tier label derived from accumulated skill points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Lowest point count of each tier is inclusive: 3 is already
    /// intermediate and 6 already advanced.
    pub fn from_points(points: u32) -> Self {
        match points {
            6.. => SkillLevel::Advanced,
            3..=5 => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }
}

impl Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}
