use std::collections::HashSet;

use crate::error::CatalogError;

use super::{Event, EventBuilder, EventId, Interest, Skill};

/// The fixed interests, events and skills the application knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    interests: Vec<Interest>,
    events: Vec<Event>,
    skills: Vec<Skill>,
}
impl Catalog {
    /// Builds a catalog from a custom list of events, keeping their order.
    ///
    /// Fails if two events share an id or an event lists no skills.
    pub fn new<I>(events: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Event>,
    {
        let events: Vec<Event> = events.into_iter().collect();
        let mut seen = HashSet::new();
        for e in &events {
            if !seen.insert(e.id) {
                return Err(CatalogError::DuplicateEventId(e.id));
            }
            if e.skills.is_empty() {
                return Err(CatalogError::NoSkills(e.id));
            }
        }
        Ok(Self {
            interests: Interest::ALL.to_vec(),
            events,
            skills: Skill::ALL.to_vec(),
        })
    }

    /// The stock campus catalog.
    pub fn campus() -> Self {
        use Interest::*;
        use Skill::*;

        let events = vec![
            EventBuilder::new(EventId(1), "Inter-College Hackathon", Technology)
                .date("10 Dec")
                .skills([TechnicalAbility, Teamwork, ProblemSolving])
                .build(),
            EventBuilder::new(EventId(2), "Drama & Theatre Night", Arts)
                .date("14 Dec")
                .skills([Creativity, Communication, Confidence])
                .build(),
            EventBuilder::new(EventId(3), "Management Case Study Competition", Management)
                .date("18 Dec")
                .skills([Leadership, AnalyticalThinking, Teamwork])
                .build(),
            EventBuilder::new(EventId(4), "Football League", Sports)
                .date("22 Dec")
                .skills([Teamwork, Discipline, Resilience])
                .build(),
            EventBuilder::new(EventId(5), "Cultural Fest: Roots & Rhythms", CulturalActivities)
                .date("5 Jan")
                .skills([Creativity, EventManagement, Collaboration])
                .build(),
            EventBuilder::new(EventId(6), "Campus Startup Pitch Day", Entrepreneurship)
                .date("12 Jan")
                .skills([Leadership, Communication, StrategicThinking])
                .build(),
        ];

        Self {
            interests: Interest::ALL.to_vec(),
            events,
            skills: Skill::ALL.to_vec(),
        }
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}
impl Default for Catalog {
    fn default() -> Self {
        Self::campus()
    }
}
