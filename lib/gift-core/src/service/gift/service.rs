use shared_types::GiftId;

use super::GiftService;
use super::dto::GetGiftResponseDTO;
use crate::model::gift::GiftRelations;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl GiftService {
    /// Returns details of a gift including its remaining quantity
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing gift
    pub async fn get_gift(&self, id: &GiftId) -> Result<GetGiftResponseDTO, ServiceError> {
        let Some(gift) = self
            .gift_repository
            .get_gift(id, &GiftRelations::default())
            .await?
        else {
            return Err(EntityNotFoundError::Gift(*id).into());
        };

        Ok(gift.into())
    }
}
