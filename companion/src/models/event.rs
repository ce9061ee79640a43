use super::{EventId, Interest, Skill};

/// A campus event from the catalog.
///
/// Events are owned by the [`Catalog`](super::Catalog) and never change once
/// it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub interest: Interest,
    /// A display label such as `"10 Dec"`, not a parsed date.
    pub date: String,
    /// Skills trained by attending, in display order.
    pub skills: Vec<Skill>,
}
impl Event {
    pub fn trains(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }
}

#[derive(Debug)]
pub struct EventBuilder {
    id: EventId,
    title: String,
    interest: Interest,
    date: String,
    skills: Vec<Skill>,
}
impl EventBuilder {
    pub fn new(id: EventId, title: &str, interest: Interest) -> Self {
        Self {
            id,
            title: String::from(title),
            interest,
            date: String::new(),
            skills: vec![],
        }
    }
    pub fn date(mut self, date: &str) -> Self {
        self.date = String::from(date);
        self
    }
    pub fn skills<I>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = Skill>,
    {
        self.skills = skills.into_iter().collect();
        self
    }
    pub fn skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }
    pub fn build(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            interest: self.interest,
            date: self.date,
            skills: self.skills,
        }
    }
}
