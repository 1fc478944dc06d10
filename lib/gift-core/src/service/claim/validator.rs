use shared_types::{CampaignId, ClaimId};

use crate::model::person::Person;
use crate::proto::session_provider::Session;
use crate::service::error::{
    AuthorizationError, ClaimError, EntityNotFoundError, ServiceError, ValidationError,
};

pub(super) fn validate_quantity(quantity: i64, max: u32) -> Result<u32, ValidationError> {
    match u32::try_from(quantity) {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(ValidationError::InvalidQuantity {
            value: quantity,
            max,
        }),
    }
}

pub(super) fn validate_claimant_family(
    claimant: &Person,
    campaign_id: &CampaignId,
) -> Result<(), ServiceError> {
    let Some(family) = &claimant.family else {
        return Err(EntityNotFoundError::Family(claimant.family_id).into());
    };

    if family.campaign_id != *campaign_id {
        return Err(ClaimError::FamilyNotInCampaign.into());
    }

    Ok(())
}

pub(super) fn validate_can_cancel(
    session: &Session,
    claimant: &Person,
    claim_id: &ClaimId,
) -> Result<(), AuthorizationError> {
    if session.admin || claimant.identity.as_deref() == Some(session.user_id.as_str()) {
        return Ok(());
    }

    Err(AuthorizationError::NotClaimant(*claim_id))
}

pub(super) fn validate_can_claim_as(
    session: &Session,
    claimant: &Person,
) -> Result<(), AuthorizationError> {
    if session.admin || claimant.identity.as_deref() == Some(session.user_id.as_str()) {
        return Ok(());
    }

    Err(AuthorizationError::NotOwnClaimant(claimant.id))
}
