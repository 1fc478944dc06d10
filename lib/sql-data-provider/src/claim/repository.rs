use autometrics::autometrics;
use gift_core::model::claim::{Claim, ClaimRelations};
use gift_core::repository::claim_repository::ClaimRepository;
use gift_core::repository::error::DataLayerError;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use shared_types::{ClaimId, GiftId, PersonId};
use time::OffsetDateTime;

use super::ClaimProvider;
use crate::entity::claim;
use crate::mapper::to_data_layer_error;

impl ClaimProvider {
    async fn resolve_relations(
        &self,
        model: claim::Model,
        relations: &ClaimRelations,
    ) -> Result<Claim, DataLayerError> {
        let mut result = Claim::try_from(model)?;

        if let Some(gift_relations) = &relations.gift {
            result.gift = Some(
                self.gift_repository
                    .get_gift(&result.gift_id, gift_relations)
                    .await?
                    .ok_or(DataLayerError::MissingRequiredRelation {
                        relation: "claim-gift",
                        id: result.gift_id.to_string(),
                    })?,
            );
        }

        if let Some(claimant_relations) = &relations.claimant {
            result.claimant = Some(
                self.person_repository
                    .get_person(&result.claimant_id, claimant_relations)
                    .await?
                    .ok_or(DataLayerError::MissingRequiredRelation {
                        relation: "claim-claimant",
                        id: result.claimant_id.to_string(),
                    })?,
            );
        }

        Ok(result)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl ClaimRepository for ClaimProvider {
    async fn create_claim(&self, request: Claim) -> Result<ClaimId, DataLayerError> {
        let claim = claim::Entity::insert(claim::ActiveModel::try_from(request)?)
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(claim.last_insert_id)
    }

    async fn get_claim(
        &self,
        id: &ClaimId,
        relations: &ClaimRelations,
    ) -> Result<Option<Claim>, DataLayerError> {
        let Some(model) = claim::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?
        else {
            return Ok(None);
        };

        Ok(Some(self.resolve_relations(model, relations).await?))
    }

    async fn get_claims_for_gift(
        &self,
        gift_id: &GiftId,
        relations: &ClaimRelations,
    ) -> Result<Vec<Claim>, DataLayerError> {
        let models = claim::Entity::find()
            .filter(claim::Column::GiftId.eq(gift_id))
            .order_by_desc(claim::Column::CreatedDate)
            .order_by_desc(claim::Column::Id)
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        let mut claims = Vec::with_capacity(models.len());
        for model in models {
            claims.push(self.resolve_relations(model, relations).await?);
        }

        Ok(claims)
    }

    async fn count_claims_since(
        &self,
        claimant_id: &PersonId,
        since: OffsetDateTime,
    ) -> Result<u64, DataLayerError> {
        claim::Entity::find()
            .filter(claim::Column::ClaimantId.eq(claimant_id))
            .filter(claim::Column::CreatedDate.gte(since))
            .count(&self.db.tx())
            .await
            .map_err(to_data_layer_error)
    }

    async fn claim_exists(
        &self,
        gift_id: &GiftId,
        claimant_id: &PersonId,
    ) -> Result<bool, DataLayerError> {
        let count = claim::Entity::find()
            .filter(claim::Column::GiftId.eq(gift_id))
            .filter(claim::Column::ClaimantId.eq(claimant_id))
            .count(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(count > 0)
    }

    async fn delete_claim(&self, id: &ClaimId) -> Result<(), DataLayerError> {
        let result = claim::Entity::delete_by_id(id)
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
