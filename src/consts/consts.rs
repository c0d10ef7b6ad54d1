use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub String);

impl EntityId {
    /// Ids are generated at person-creation time by the caller. The
    /// repository only persists what it is given and never mints ids itself.
    pub fn new() -> EntityId {
        EntityId(Uuid::new_v4().to_string())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Values
pub const DEFAULT_ROSTER_LOCATION: &str = "data/people.json";
