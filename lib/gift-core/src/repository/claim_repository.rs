use shared_types::{ClaimId, GiftId, PersonId};
use time::OffsetDateTime;

use super::error::DataLayerError;
use crate::model::claim::{Claim, ClaimRelations};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClaimRepository: Send + Sync {
    async fn create_claim(&self, request: Claim) -> Result<ClaimId, DataLayerError>;

    async fn get_claim(
        &self,
        id: &ClaimId,
        relations: &ClaimRelations,
    ) -> Result<Option<Claim>, DataLayerError>;

    /// Newest first
    async fn get_claims_for_gift(
        &self,
        gift_id: &GiftId,
        relations: &ClaimRelations,
    ) -> Result<Vec<Claim>, DataLayerError>;

    async fn count_claims_since(
        &self,
        claimant_id: &PersonId,
        since: OffsetDateTime,
    ) -> Result<u64, DataLayerError>;

    async fn claim_exists(
        &self,
        gift_id: &GiftId,
        claimant_id: &PersonId,
    ) -> Result<bool, DataLayerError>;

    async fn delete_claim(&self, id: &ClaimId) -> Result<(), DataLayerError>;
}
