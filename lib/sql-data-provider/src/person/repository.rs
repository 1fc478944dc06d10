use autometrics::autometrics;
use gift_core::model::person::{Person, PersonRelations};
use gift_core::repository::error::DataLayerError;
use gift_core::repository::person_repository::PersonRepository;
use sea_orm::EntityTrait;
use shared_types::PersonId;

use super::PersonProvider;
use crate::entity::person;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl PersonRepository for PersonProvider {
    async fn get_person(
        &self,
        id: &PersonId,
        relations: &PersonRelations,
    ) -> Result<Option<Person>, DataLayerError> {
        let Some(model) = person::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?
        else {
            return Ok(None);
        };

        let family_id = model.family_id;
        let mut person = Person::from(model);

        if let Some(family_relations) = &relations.family {
            person.family = Some(
                self.family_repository
                    .get_family(&family_id, family_relations)
                    .await?
                    .ok_or(DataLayerError::MissingRequiredRelation {
                        relation: "person-family",
                        id: family_id.to_string(),
                    })?,
            );
        }

        Ok(Some(person))
    }
}
