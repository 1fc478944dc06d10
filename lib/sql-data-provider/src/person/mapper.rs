use gift_core::model::person::Person;

use crate::entity::person;

impl From<person::Model> for Person {
    fn from(value: person::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            family_id: value.family_id,
            identity: value.identity,
            created_date: value.created_date,
            last_modified: value.last_modified,
            family: None,
        }
    }
}
