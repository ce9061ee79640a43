use std::{collections::BTreeSet, fmt::Display};

use tracing::{info, warn};

use super::{
    profile::{self, SkillEntry},
    Catalog, Database, Event, EventId, Interest, KeyValueStore, UserState,
};
use crate::error::{SelectionError, StorageError};

/// Outcome of [`StateStore::mark_attended`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendedResult {
    /// Attendance was recorded and skill points awarded.
    Recorded,
    /// The event was already attended; nothing changed.
    AlreadyAttended,
    /// No event with that id is in the catalog; nothing changed.
    UnknownEvent,
}

/// Status line after committing an interest selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestStatus {
    /// At least one interest is selected, events are filtered.
    Personalised,
    /// Nothing is selected, every event is shown.
    ShowingAll,
}
impl Display for InterestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterestStatus::Personalised => {
                f.write_str("Interests saved. Events are now personalised for you.")
            }
            InterestStatus::ShowingAll => f.write_str("No interests selected. Showing all events."),
        }
    }
}

/// The checkbox selection a user is editing before saving it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InterestDraft {
    selected: BTreeSet<Interest>,
}
impl InterestDraft {
    /// Flips one interest and returns whether it is now selected.
    pub fn toggle(&mut self, interest: Interest) -> bool {
        if self.selected.remove(&interest) {
            false
        } else {
            self.selected.insert(interest);
            true
        }
    }
    pub fn is_selected(&self, interest: Interest) -> bool {
        self.selected.contains(&interest)
    }
    pub fn selected(&self) -> &BTreeSet<Interest> {
        &self.selected
    }
}

/// Owns the user state for the session and writes every change through to
/// the [`Database`].
///
/// When a write fails the change is kept in memory and the error returned, so
/// the session carries on with the in-memory state as the source of truth.
pub struct StateStore<S> {
    db: Database<S>,
    catalog: Catalog,
    state: UserState,
}
impl<S> StateStore<S>
where
    S: KeyValueStore,
{
    /// Loads the stored state. Skill points that do not match the recorded
    /// attendance are rebuilt from it.
    pub fn open(db: Database<S>, catalog: Catalog) -> Self {
        let mut state = db.load();
        if state.normalize(&catalog) {
            warn!(key = %db.key(), "stored skill points did not match attendance, rebuilt");
        }
        Self { db, catalog, state }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    pub fn database(&self) -> &Database<S> {
        &self.db
    }
    pub fn is_attended(&self, id: EventId) -> bool {
        self.state.has_attended(id)
    }

    /// Replaces the selected interests with exactly `selected`.
    pub fn set_interests<I>(&mut self, selected: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = Interest>,
    {
        self.state.selected_interests = selected.into_iter().collect();
        info!(count = self.state.selected_interests.len(), "interests saved");
        self.db.save(&self.state)
    }

    /// Like [`set_interests`](Self::set_interests) but from display names.
    ///
    /// A single unknown name rejects the whole selection and leaves the
    /// current one in place.
    pub fn set_interest_names<I, T>(&mut self, names: I) -> Result<(), SelectionError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let selected = names
            .into_iter()
            .map(|n| {
                n.as_ref()
                    .parse::<Interest>()
                    .map_err(|e| SelectionError::UnknownInterest(e.name))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;
        self.set_interests(selected)?;
        Ok(())
    }

    /// Marks an event as attended and awards one point per listed skill.
    ///
    /// Repeating the call for the same event changes nothing.
    pub fn mark_attended(&mut self, id: EventId) -> Result<AttendedResult, StorageError> {
        let Some(event) = self.catalog.event(id) else {
            return Ok(AttendedResult::UnknownEvent);
        };
        if self.state.has_attended(id) {
            return Ok(AttendedResult::AlreadyAttended);
        }

        self.state.attended_event_ids.push(id);
        for skill in &event.skills {
            let points = self.state.skill_points.entry(*skill).or_insert(0);
            *points = points.saturating_add(1);
        }
        info!(event = %id, title = %event.title, "attendance recorded");

        self.db.save(&self.state)?;
        Ok(AttendedResult::Recorded)
    }

    /// A draft seeded with the saved selection.
    pub fn draft(&self) -> InterestDraft {
        InterestDraft {
            selected: self.state.selected_interests.clone(),
        }
    }

    pub fn commit_draft(&mut self, draft: InterestDraft) -> Result<InterestStatus, StorageError> {
        let status = if draft.selected.is_empty() {
            InterestStatus::ShowingAll
        } else {
            InterestStatus::Personalised
        };
        self.set_interests(draft.selected)?;
        Ok(status)
    }

    /// Takes over a state that was reloaded from storage after an outside
    /// change. Nothing is written back.
    pub fn adopt(&mut self, mut state: UserState) {
        if state.normalize(&self.catalog) {
            warn!("adopted skill points did not match attendance, rebuilt");
        }
        self.state = state;
    }

    pub fn visible_events(&self) -> Vec<&Event> {
        profile::visible_events(&self.catalog, &self.state.selected_interests)
    }
    pub fn skill_profile(&self) -> Vec<SkillEntry> {
        profile::skill_profile(self.catalog.skills(), &self.state.skill_points)
    }
    pub fn resume_bullets(&self) -> Vec<String> {
        profile::resume_bullets(&self.state.attended_event_ids, &self.catalog)
    }
}
