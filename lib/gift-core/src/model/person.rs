use shared_types::{FamilyId, PersonId};
use time::OffsetDateTime;

use super::family::{Family, FamilyRelations};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub family_id: FamilyId,
    /// External identifier of the donor account linked to this person, if any
    pub identity: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations
    pub family: Option<Family>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PersonRelations {
    pub family: Option<FamilyRelations>,
}
