use autometrics::autometrics;
use gift_core::model::gift::{Gift, GiftRelations};
use gift_core::repository::error::DataLayerError;
use gift_core::repository::gift_repository::GiftRepository;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use shared_types::GiftId;
use time::OffsetDateTime;

use super::GiftProvider;
use crate::entity::gift;
use crate::mapper::{
    quantity_from_db, quantity_to_db, to_data_layer_error, to_update_data_layer_error,
};

impl GiftProvider {
    async fn current_claimed_quantity(&self, id: &GiftId) -> Result<u32, DataLayerError> {
        let model = gift::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?
            .ok_or(DataLayerError::RecordNotUpdated)?;

        quantity_from_db(model.claimed_quantity)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl GiftRepository for GiftProvider {
    async fn get_gift(
        &self,
        id: &GiftId,
        relations: &GiftRelations,
    ) -> Result<Option<Gift>, DataLayerError> {
        let Some(model) = gift::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?
        else {
            return Ok(None);
        };

        let family_id = model.family_id;
        let mut gift = Gift::try_from(model)?;

        if let Some(family_relations) = &relations.family {
            gift.family = Some(
                self.family_repository
                    .get_family(&family_id, family_relations)
                    .await?
                    .ok_or(DataLayerError::MissingRequiredRelation {
                        relation: "gift-family",
                        id: family_id.to_string(),
                    })?,
            );
        }

        Ok(Some(gift))
    }

    async fn reserve_quantity(
        &self,
        id: &GiftId,
        quantity: u32,
    ) -> Result<Option<u32>, DataLayerError> {
        let quantity = quantity_to_db(quantity)?;

        // claimed + quantity <= total, evaluated by the database
        let result = gift::Entity::update_many()
            .col_expr(
                gift::Column::ClaimedQuantity,
                Expr::col(gift::Column::ClaimedQuantity).add(quantity),
            )
            .col_expr(
                gift::Column::LastModified,
                Expr::value(OffsetDateTime::now_utc()),
            )
            .filter(gift::Column::Id.eq(id))
            .filter(
                Expr::col(gift::Column::ClaimedQuantity)
                    .lte(Expr::col(gift::Column::TotalQuantity).sub(quantity)),
            )
            .exec(&self.db.tx())
            .await
            .map_err(to_update_data_layer_error)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(self.current_claimed_quantity(id).await?))
    }

    async fn release_quantity(&self, id: &GiftId, quantity: u32) -> Result<u32, DataLayerError> {
        let quantity = quantity_to_db(quantity)?;

        let result = gift::Entity::update_many()
            .col_expr(
                gift::Column::ClaimedQuantity,
                Expr::col(gift::Column::ClaimedQuantity).sub(quantity),
            )
            .col_expr(
                gift::Column::LastModified,
                Expr::value(OffsetDateTime::now_utc()),
            )
            .filter(gift::Column::Id.eq(id))
            .filter(gift::Column::ClaimedQuantity.gte(quantity))
            .exec(&self.db.tx())
            .await
            .map_err(to_update_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        self.current_claimed_quantity(id).await
    }
}
