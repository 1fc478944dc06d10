use shared_types::{CampaignId, OrganisationId};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::core_config::{ClaimConfig, RateLimitConfig};
use crate::model::campaign::{Campaign, CampaignStatus};
use crate::model::family::Family;
use crate::model::gift::Gift;
use crate::model::person::Person;

pub fn claim_config() -> ClaimConfig {
    ClaimConfig {
        max_quantity_per_claim: 10,
        rate_limit: RateLimitConfig {
            max_claims: 5,
            window: time::Duration::minutes(10),
        },
        allow_duplicate_claims: false,
    }
}

pub fn dummy_campaign(status: CampaignStatus) -> Campaign {
    let now = OffsetDateTime::now_utc();
    Campaign {
        id: CampaignId::from(Uuid::new_v4()),
        name: "Winter drive".to_string(),
        status,
        organization_type: "CHARITY".to_string(),
        organisation_id: OrganisationId::from(Uuid::new_v4()),
        created_date: now,
        last_modified: now,
    }
}

pub fn dummy_family(campaign: &Campaign) -> Family {
    let now = OffsetDateTime::now_utc();
    Family {
        id: Uuid::new_v4().into(),
        name: "Family".to_string(),
        campaign_id: campaign.id,
        created_date: now,
        last_modified: now,
        campaign: Some(campaign.clone()),
    }
}

pub fn dummy_gift(family: &Family, total_quantity: u32, claimed_quantity: u32) -> Gift {
    let now = OffsetDateTime::now_utc();
    Gift {
        id: Uuid::new_v4().into(),
        name: "Winter coat".to_string(),
        description: None,
        family_id: family.id,
        total_quantity,
        claimed_quantity,
        created_date: now,
        last_modified: now,
        family: Some(family.clone()),
    }
}

pub fn dummy_person(family: &Family, identity: Option<&str>) -> Person {
    let now = OffsetDateTime::now_utc();
    Person {
        id: Uuid::new_v4().into(),
        name: "Donor".to_string(),
        family_id: family.id,
        identity: identity.map(ToOwned::to_owned),
        created_date: now,
        last_modified: now,
        family: Some(family.clone()),
    }
}
