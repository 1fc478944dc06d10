use shared_types::{CampaignId, FamilyId};
use time::OffsetDateTime;

use super::campaign::{Campaign, CampaignRelations};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Family {
    pub id: FamilyId,
    pub name: String,
    pub campaign_id: CampaignId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations
    pub campaign: Option<Campaign>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct FamilyRelations {
    pub campaign: Option<CampaignRelations>,
}
