use serde::Serialize;
use shared_types::{ClaimId, FamilyId, GiftId, PersonId};
use strum::Display;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Gift `{0}` not found")]
    Gift(GiftId),

    #[error("Claim `{0}` not found")]
    Claim(ClaimId),

    #[error("Claimant `{0}` not found")]
    Claimant(PersonId),

    #[error("Family `{0}` not found")]
    Family(FamilyId),
}

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Campaign is not accepting claims, status `{status}`")]
    CampaignInactive { status: String },

    #[error("Requested {requested} units, {remaining} remaining")]
    InsufficientQuantity { requested: u32, remaining: u32 },

    #[error("Claimant family does not belong to the campaign of the gift")]
    FamilyNotInCampaign,

    #[error("Claimant `{0}` exceeded the claim rate limit")]
    RateLimited(PersonId),

    #[error("Claimant `{claimant_id}` already claimed gift `{gift_id}`")]
    AlreadyClaimed {
        gift_id: GiftId,
        claimant_id: PersonId,
    },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Quantity must be between 1 and {max}, got {value}")]
    InvalidQuantity { value: i64, max: u32 },
}

#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("Missing session")]
    MissingSession,

    #[error("Only the claimant or an administrator can cancel claim `{0}`")]
    NotClaimant(ClaimId),

    #[error("Person `{0}` is not linked to the caller")]
    NotOwnClaimant(PersonId),

    #[error("Administrator role required")]
    AdminRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    GiftNotFound,
    CampaignInactive,
    InsufficientQuantity,
    InvalidInput,
    RateLimit,
    AlreadyClaimed,
    FamilyNotFound,
    DatabaseError,

    ClaimNotFound,
    Forbidden,

    ConfigError,
    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::GiftNotFound => "Gift not found",
            ErrorCode::CampaignInactive => "Campaign is not active",
            ErrorCode::InsufficientQuantity => "Not enough remaining quantity",
            ErrorCode::InvalidInput => "Invalid input",
            ErrorCode::RateLimit => "Too many claims, try again later",
            ErrorCode::AlreadyClaimed => "Gift already claimed by this claimant",
            ErrorCode::FamilyNotFound => "Family not found",
            ErrorCode::DatabaseError => "Database error",

            ErrorCode::ClaimNotFound => "Claim not found",
            ErrorCode::Forbidden => "Forbidden",

            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::Claim(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Authorization(_) => ErrorCode::Forbidden,
            ServiceError::ConfigValidationError(_) => ErrorCode::ConfigError,
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Gift(_) => ErrorCode::GiftNotFound,
            EntityNotFoundError::Claim(_) => ErrorCode::ClaimNotFound,
            EntityNotFoundError::Claimant(_) | EntityNotFoundError::Family(_) => {
                ErrorCode::FamilyNotFound
            }
        }
    }
}

impl ClaimError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ClaimError::CampaignInactive { .. } => ErrorCode::CampaignInactive,
            ClaimError::InsufficientQuantity { .. } => ErrorCode::InsufficientQuantity,
            ClaimError::FamilyNotInCampaign => ErrorCode::FamilyNotFound,
            ClaimError::RateLimited(_) => ErrorCode::RateLimit,
            ClaimError::AlreadyClaimed { .. } => ErrorCode::AlreadyClaimed,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidQuantity { .. } => ErrorCode::InvalidInput,
        }
    }
}
