use shared_types::{CampaignId, GiftId, PersonId};
use time::OffsetDateTime;

use crate::model::claim::Claim;
use crate::model::gift::Gift;
use crate::proto::cache_invalidator::{CachePath, InvalidationEvent};
use crate::service::error::ServiceError;

pub(super) fn claim_from_request(
    gift_id: GiftId,
    claimant_id: PersonId,
    quantity: u32,
    now: OffsetDateTime,
) -> Claim {
    Claim {
        id: uuid::Uuid::new_v4().into(),
        gift_id,
        claimant_id,
        quantity,
        created_date: now,
        gift: None,
        claimant: None,
    }
}

pub(super) fn campaign_id_of(gift: &Gift) -> Result<CampaignId, ServiceError> {
    gift.family
        .as_ref()
        .map(|family| family.campaign_id)
        .ok_or(ServiceError::MappingError("family is None".to_string()))
}

pub(super) fn invalidation_event(campaign_id: CampaignId, gift_id: GiftId) -> InvalidationEvent {
    InvalidationEvent {
        paths: vec![CachePath::Campaign(campaign_id), CachePath::Gift(gift_id)],
    }
}
