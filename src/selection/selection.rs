use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{person::Person, standup::Standup},
};

#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("Cannot start a standup with no attendees selected")]
    NoAttendees,

    #[error("No attendee row for person: {0}")]
    UnknownAttendee(EntityId),
}

/// One row on the create-standup screen: a person plus whether they are in
/// the room for this session
#[derive(Clone, Debug, PartialEq)]
pub struct AttendeeRow {
    pub person: Person,
    pub attending: bool,
}

/// Attendance flags for one standup session. Snapshots the roster in order,
/// with everyone attending until toggled off.
#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceSheet {
    rows: Vec<AttendeeRow>,
}

impl AttendanceSheet {
    pub fn new(roster: Vec<Person>) -> Self {
        Self {
            rows: roster
                .into_iter()
                .map(|person| AttendeeRow {
                    person,
                    attending: true,
                })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[AttendeeRow] {
        &self.rows
    }

    /// Flips one person's attendance, returning the new flag
    pub fn toggle(&mut self, id: &EntityId) -> Result<bool, SelectionError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| &row.person.id == id)
            .ok_or_else(|| SelectionError::UnknownAttendee(id.clone()))?;

        row.attending = !row.attending;

        Ok(row.attending)
    }

    /// Filters the sheet down to the attending subset (keeping roster
    /// order) and picks the winner uniformly at random from it. Each
    /// attendee is equally likely, past wins carry no weight.
    pub fn start(&self, rng: &mut impl Rng) -> Result<Standup, SelectionError> {
        let people: Vec<Person> = self
            .rows
            .iter()
            .filter(|row| row.attending)
            .map(|row| row.person.clone())
            .collect();

        let winner = people
            .choose(rng)
            .cloned()
            .ok_or(SelectionError::NoAttendees)?;

        Ok(Standup { people, winner })
    }
}
