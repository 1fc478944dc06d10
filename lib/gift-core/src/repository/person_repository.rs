use shared_types::PersonId;

use super::error::DataLayerError;
use crate::model::person::{Person, PersonRelations};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PersonRepository: Send + Sync {
    async fn get_person(
        &self,
        id: &PersonId,
        relations: &PersonRelations,
    ) -> Result<Option<Person>, DataLayerError>;
}
