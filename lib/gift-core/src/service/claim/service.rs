use futures::FutureExt;
use one_dto_mapper::convert_inner;
use shared_types::{CampaignId, ClaimId, GiftId};
use time::OffsetDateTime;

use super::ClaimService;
use super::dto::{ClaimGiftRequestDTO, ClaimGiftResponseDTO, GetClaimResponseDTO};
use super::mapper::{campaign_id_of, claim_from_request, invalidation_event};
use super::validator::{
    validate_can_cancel, validate_can_claim_as, validate_claimant_family, validate_quantity,
};
use crate::model::campaign::CampaignRelations;
use crate::model::claim::ClaimRelations;
use crate::model::family::FamilyRelations;
use crate::model::gift::GiftRelations;
use crate::model::person::PersonRelations;
use crate::proto::session_provider::Session;
use crate::repository::error::DataLayerError;
use crate::service::error::{AuthorizationError, ClaimError, EntityNotFoundError, ServiceError};

impl ClaimService {
    /// Reserves units of a gift for a claimant.
    ///
    /// All checks and the quantity reservation run in one transaction. The reservation itself
    /// is a conditional update, so concurrent claims can never exceed the total quantity.
    /// Callers may only claim for a person linked to their own identity, unless they are
    /// administrators.
    ///
    /// # Arguments
    ///
    /// * `gift_id` - Gift to claim
    /// * `request` - Claimant and requested quantity
    pub async fn claim_gift(
        &self,
        gift_id: &GiftId,
        request: ClaimGiftRequestDTO,
    ) -> Result<ClaimGiftResponseDTO, ServiceError> {
        let session = self
            .session_provider
            .session()
            .ok_or(AuthorizationError::MissingSession)?;
        let now = OffsetDateTime::now_utc();

        let (response, campaign_id) = self
            .tx_manager
            .tx(self
                .reserve_in_tx(*gift_id, request.clone(), session, now)
                .boxed())
            .await??;

        tracing::info!(
            "Claimant {} claimed {} of gift {gift_id}, claimed quantity now {}",
            request.claimant_id,
            request.quantity,
            response.claimed_quantity
        );

        self.cache_invalidator
            .invalidate(invalidation_event(campaign_id, *gift_id));

        Ok(response)
    }

    async fn reserve_in_tx(
        &self,
        gift_id: GiftId,
        request: ClaimGiftRequestDTO,
        session: Session,
        now: OffsetDateTime,
    ) -> Result<(ClaimGiftResponseDTO, CampaignId), ServiceError> {
        let quantity = validate_quantity(request.quantity, self.config.max_quantity_per_claim);

        // first statement of the unit of work, so the write lock is held before any read
        let reserved = match &quantity {
            Ok(quantity) => {
                self.gift_repository
                    .reserve_quantity(&gift_id, *quantity)
                    .await?
            }
            Err(_) => None,
        };

        let gift = self
            .gift_repository
            .get_gift(
                &gift_id,
                &GiftRelations {
                    family: Some(FamilyRelations {
                        campaign: Some(CampaignRelations::default()),
                    }),
                },
            )
            .await?
            .ok_or(EntityNotFoundError::Gift(gift_id))?;

        let campaign = gift
            .family
            .as_ref()
            .and_then(|family| family.campaign.as_ref())
            .ok_or(ServiceError::MappingError("campaign is None".to_string()))?;

        if !campaign.status.accepts_claims() {
            return Err(ClaimError::CampaignInactive {
                status: campaign.status.to_string(),
            }
            .into());
        }

        let quantity = quantity?;

        let claimant = self
            .person_repository
            .get_person(
                &request.claimant_id,
                &PersonRelations {
                    family: Some(FamilyRelations::default()),
                },
            )
            .await?
            .ok_or(EntityNotFoundError::Claimant(request.claimant_id))?;
        validate_claimant_family(&claimant, &campaign.id)?;
        validate_can_claim_as(&session, &claimant)?;

        // read after the failed reservation, under the write lock
        let Some(claimed_quantity) = reserved else {
            return Err(ClaimError::InsufficientQuantity {
                requested: quantity,
                remaining: gift.remaining_quantity(),
            }
            .into());
        };

        let rate_limit = &self.config.rate_limit;
        let recent_claims = self
            .claim_repository
            .count_claims_since(&claimant.id, now - rate_limit.window)
            .await?;
        if recent_claims >= u64::from(rate_limit.max_claims) {
            return Err(ClaimError::RateLimited(claimant.id).into());
        }

        if !self.config.allow_duplicate_claims
            && self
                .claim_repository
                .claim_exists(&gift_id, &claimant.id)
                .await?
        {
            return Err(ClaimError::AlreadyClaimed {
                gift_id,
                claimant_id: claimant.id,
            }
            .into());
        }

        let id = self
            .claim_repository
            .create_claim(claim_from_request(gift_id, claimant.id, quantity, now))
            .await?;

        Ok((
            ClaimGiftResponseDTO {
                id,
                claimed_quantity,
            },
            campaign.id,
        ))
    }

    /// Cancels a claim and returns its units to the gift.
    ///
    /// Allowed for the claimant and for administrators.
    pub async fn cancel_claim(&self, id: &ClaimId) -> Result<(), ServiceError> {
        let session = self
            .session_provider
            .session()
            .ok_or(AuthorizationError::MissingSession)?;

        // claims are immutable, the delete below confirms this one still exists
        let claim = self
            .claim_repository
            .get_claim(
                id,
                &ClaimRelations {
                    gift: Some(GiftRelations {
                        family: Some(FamilyRelations::default()),
                    }),
                    claimant: Some(PersonRelations::default()),
                },
            )
            .await?
            .ok_or(EntityNotFoundError::Claim(*id))?;

        let claimant = claim
            .claimant
            .as_ref()
            .ok_or(ServiceError::MappingError("claimant is None".to_string()))?;
        validate_can_cancel(&session, claimant, id)?;

        let gift = claim
            .gift
            .as_ref()
            .ok_or(ServiceError::MappingError("gift is None".to_string()))?;
        let campaign_id = campaign_id_of(gift)?;

        self.tx_manager
            .tx(async {
                match self.claim_repository.delete_claim(id).await {
                    Ok(()) => {}
                    // removed by a concurrent cancellation
                    Err(DataLayerError::RecordNotUpdated) => {
                        return Err(EntityNotFoundError::Claim(*id).into());
                    }
                    Err(error) => return Err(error.into()),
                }

                self.gift_repository
                    .release_quantity(&claim.gift_id, claim.quantity)
                    .await?;

                Ok::<_, ServiceError>(())
            }
            .boxed())
            .await??;

        tracing::info!(
            "Claim {id} on gift {} cancelled by {}",
            claim.gift_id,
            session.user_id
        );

        self.cache_invalidator
            .invalidate(invalidation_event(campaign_id, claim.gift_id));

        Ok(())
    }

    /// Returns details of a claim
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing claim
    pub async fn get_claim(&self, id: &ClaimId) -> Result<GetClaimResponseDTO, ServiceError> {
        let claim = self
            .claim_repository
            .get_claim(id, &ClaimRelations::default())
            .await?
            .ok_or(EntityNotFoundError::Claim(*id))?;

        Ok(claim.into())
    }

    /// Returns all claims of a gift, newest first
    pub async fn get_gift_claims(
        &self,
        gift_id: &GiftId,
    ) -> Result<Vec<GetClaimResponseDTO>, ServiceError> {
        self.gift_repository
            .get_gift(gift_id, &GiftRelations::default())
            .await?
            .ok_or(EntityNotFoundError::Gift(*gift_id))?;

        let claims = self
            .claim_repository
            .get_claims_for_gift(gift_id, &ClaimRelations::default())
            .await?;

        Ok(convert_inner(claims))
    }
}
