use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
}

impl Person {
    pub fn new(name: String) -> Self {
        Person {
            id: EntityId::new(),
            name,
        }
    }

    pub fn new_test() -> Self {
        Person {
            id: EntityId("1".to_string()),
            name: "Full Name".to_string(),
        }
    }
}
