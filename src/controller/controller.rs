use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{person::Person, standup::Standup},
    repository::repository::{PeopleRepository, RepositoryError},
    selection::selection::{AttendanceSheet, SelectionError},
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Intent {intent:?} is not valid on the {view} view")]
    UnsupportedIntent { view: &'static str, intent: Intent },
}

/// The active screen plus the data the UI needs to render it. Exactly one
/// view is active at a time and each state has a single fixed "back"
/// target, there is no multi-level history.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    /// Initial screen: pick who is in the room for this session
    StandupCreate { sheet: AttendanceSheet },
    /// Roster table with per-row edit / delete actions
    PeopleIndex { people: Vec<Person> },
    /// Blank create-person form
    NewPerson,
    /// Edit form, prefilled with the loaded person's name
    EditPerson { person: Person },
    /// Result screen announcing the winner
    StandupShow { standup: Standup },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::StandupCreate { .. } => "StandupCreate",
            View::PeopleIndex { .. } => "PeopleIndex",
            View::NewPerson => "NewPerson",
            View::EditPerson { .. } => "EditPerson",
            View::StandupShow { .. } => "StandupShow",
        }
    }
}

/// UI events as owned command values. Each table row constructs its own
/// intent carrying its own id at render time, so dispatch never depends on
/// captured loop state.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    // StandupCreate
    EditPeople,
    ToggleAttendance { id: EntityId },
    StartStandup,

    // PeopleIndex
    AddNew,
    EditPerson { id: EntityId },
    DeletePerson { id: EntityId },
    BackToStandup,

    // NewPerson
    CreatePerson { name: String },

    // EditPerson
    UpdatePerson { name: String },

    // StandupShow
    Back,
}

/// Owns the active view and coordinates the repository and the selection
/// engine. The controller is passed explicitly by the application driver,
/// never looked up through global state, and it swallows no errors: every
/// repository / selection failure propagates to the caller with the view
/// left exactly where it was.
pub struct NavigationController {
    repository: PeopleRepository,
    view: View,
}

impl NavigationController {
    pub fn new(repository: PeopleRepository) -> Result<Self, AppError> {
        let view = Self::standup_create_view(&repository)?;

        Ok(Self { repository, view })
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Applies one UI intent to the active view. Transitions either fully
    /// succeed or leave the view untouched, there are no partial moves.
    pub fn dispatch(&mut self, intent: Intent) -> Result<&View, AppError> {
        log::debug!("Dispatching {:?} on {}", intent, self.view.name());

        let next_view = match (&self.view, intent) {
            (View::StandupCreate { .. }, Intent::EditPeople) => {
                Self::people_index_view(&self.repository)?
            }
            (View::StandupCreate { sheet }, Intent::ToggleAttendance { id }) => {
                let mut sheet = sheet.clone();
                sheet.toggle(&id)?;

                View::StandupCreate { sheet }
            }
            (View::StandupCreate { sheet }, Intent::StartStandup) => {
                let standup = sheet.start(&mut rand::thread_rng())?;

                log::info!("🎉 Standup winner: {}", standup.winner.name);

                View::StandupShow { standup }
            }

            (View::PeopleIndex { .. }, Intent::AddNew) => View::NewPerson,
            (View::PeopleIndex { .. }, Intent::EditPerson { id }) => {
                let person = self.repository.find_by_id(&id)?;

                View::EditPerson { person }
            }
            (View::PeopleIndex { .. }, Intent::DeletePerson { id }) => {
                self.repository.delete_by_id(&id)?;

                Self::people_index_view(&self.repository)?
            }
            (View::PeopleIndex { .. }, Intent::BackToStandup) => {
                Self::standup_create_view(&self.repository)?
            }

            (View::NewPerson, Intent::CreatePerson { name }) => {
                // The id is minted here, caller-side. The repository only
                // persists it.
                self.repository.create(Person::new(name))?;

                Self::people_index_view(&self.repository)?
            }

            (View::EditPerson { person }, Intent::UpdatePerson { name }) => {
                let mut updated = person.clone();
                updated.name = name;

                self.repository.update(updated)?;

                Self::people_index_view(&self.repository)?
            }

            (View::StandupShow { .. }, Intent::Back) => {
                Self::standup_create_view(&self.repository)?
            }

            (view, intent) => {
                return Err(AppError::UnsupportedIntent {
                    view: view.name(),
                    intent,
                })
            }
        };

        self.view = next_view;

        Ok(&self.view)
    }

    pub fn show_people_index(&mut self) -> Result<&View, AppError> {
        self.view = Self::people_index_view(&self.repository)?;

        Ok(&self.view)
    }

    pub fn show_new_person(&mut self) -> &View {
        self.view = View::NewPerson;

        &self.view
    }

    pub fn show_edit_person(&mut self, id: &EntityId) -> Result<&View, AppError> {
        // Load before transitioning: a missing id must leave the current
        // view in place
        let person = self.repository.find_by_id(id)?;

        self.view = View::EditPerson { person };

        Ok(&self.view)
    }

    pub fn show_standup_create(&mut self) -> Result<&View, AppError> {
        self.view = Self::standup_create_view(&self.repository)?;

        Ok(&self.view)
    }

    pub fn show_standup_show(&mut self, standup: Standup) -> &View {
        self.view = View::StandupShow { standup };

        &self.view
    }

    // The index never renders stale rows, entering it always re-reads the
    // roster
    fn people_index_view(repository: &PeopleRepository) -> Result<View, AppError> {
        let people = repository.get_all()?;

        Ok(View::PeopleIndex { people })
    }

    // Fresh roster read with everyone attending by default
    fn standup_create_view(repository: &PeopleRepository) -> Result<View, AppError> {
        let sheet = AttendanceSheet::new(repository.get_all()?);

        Ok(View::StandupCreate { sheet })
    }
}
