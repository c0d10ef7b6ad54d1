use std::path::PathBuf;

use thiserror::Error;

use crate::{
    consts::consts::{EntityId, DEFAULT_ROSTER_LOCATION},
    model::person::Person,
    persistence::storage::{file::FileStorage, ReadBlobState, Storage, StorageError},
};

#[derive(Error, Debug)]
pub enum RepositoryError {
    // CRUD - GET
    #[error("Not found, no person with id: {0}")]
    NotFound(EntityId),

    // CRUD - CREATE
    #[error("Cannot create, a person already exists with id: {0}")]
    DuplicateId(EntityId),

    // Constraints
    #[error("Cannot save a person with an empty name")]
    EmptyName,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
#[derive(Debug, Clone)]
pub struct RepositoryOptions {
    pub roster_path: PathBuf,
}

impl RepositoryOptions {
    /// Defines where the roster file lives. Reads / writes go to this path
    pub fn set_roster_path(mut self, roster_path: PathBuf) -> Self {
        self.roster_path = roster_path;
        self
    }
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_LOCATION),
        }
    }
}

#[cfg(test)]
impl RepositoryOptions {
    pub fn new_test() -> Self {
        let roster_path: PathBuf = [
            "/",
            "tmp",
            "standup",
            &uuid::Uuid::new_v4().to_string(),
            "people.json",
        ]
        .iter()
        .collect();

        RepositoryOptions::default().set_roster_path(roster_path)
    }
}

/// Sole authority for reading and mutating the persisted roster. The file
/// is the single source of truth: every operation re-reads the whole
/// collection before acting, nothing is cached between calls. All access
/// runs on one sequential control thread; any future background access must
/// funnel mutations through a single writer.
pub struct PeopleRepository {
    storage: Box<dyn Storage>,
}

impl PeopleRepository {
    pub fn new(options: RepositoryOptions) -> RepositoryResult<Self> {
        let storage = FileStorage::new(options.roster_path);

        storage.init()?;

        Ok(Self {
            storage: Box::new(storage),
        })
    }

    #[cfg(test)]
    pub fn new_test() -> Self {
        Self::new(RepositoryOptions::new_test()).expect("should create test repository")
    }

    /// Reads the full collection in storage order
    pub fn get_all(&self) -> RepositoryResult<Vec<Person>> {
        let bytes = match self.storage.read_blob()? {
            ReadBlobState::Found(bytes) => bytes,
            ReadBlobState::NotFound => {
                return Err(RepositoryError::Storage(StorageError::RosterFileMissing))
            }
        };

        let people: Vec<Person> = serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::UnableToParseRoster(Box::new(e)))?;

        Ok(people)
    }

    /// Linear scan over the full collection, returns the first match
    pub fn find_by_id(&self, id: &EntityId) -> RepositoryResult<Person> {
        self.get_all()?
            .into_iter()
            .find(|person| &person.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    pub fn create(&self, person: Person) -> RepositoryResult<Person> {
        validate_name(&person)?;

        let mut people = self.get_all()?;

        if people.iter().any(|existing| existing.id == person.id) {
            return Err(RepositoryError::DuplicateId(person.id));
        }

        people.push(person.clone());
        self.write_all(&people)?;

        log::info!("Created person [id: {}]", person.id);

        Ok(person)
    }

    /// Replaces the matching record in place, so edits keep the stored order
    pub fn update(&self, person: Person) -> RepositoryResult<Person> {
        validate_name(&person)?;

        let mut people = self.get_all()?;

        let existing = people
            .iter_mut()
            .find(|existing| existing.id == person.id)
            .ok_or_else(|| RepositoryError::NotFound(person.id.clone()))?;

        *existing = person.clone();
        self.write_all(&people)?;

        log::info!("Updated person [id: {}]", person.id);

        Ok(person)
    }

    pub fn delete_by_id(&self, id: &EntityId) -> RepositoryResult<()> {
        let mut people = self.get_all()?;

        let index = people
            .iter()
            .position(|person| &person.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

        people.remove(index);
        self.write_all(&people)?;

        log::info!("Deleted person [id: {}]", id);

        Ok(())
    }

    // Full-file overwrite, the write-side mirror of get_all
    fn write_all(&self, people: &[Person]) -> RepositoryResult<()> {
        let bytes = serde_json::to_vec(people)
            .map_err(|e| StorageError::UnableToWriteBlob(Box::new(e)))?;

        self.storage.write_blob(bytes)?;

        Ok(())
    }
}

fn validate_name(person: &Person) -> RepositoryResult<()> {
    if person.name.trim().is_empty() {
        return Err(RepositoryError::EmptyName);
    }

    Ok(())
}
