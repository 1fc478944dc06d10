use gift_core::model::campaign::CampaignStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use shared_types::{CampaignId, FamilyId, GiftId, OrganisationId, PersonId};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::entity::{campaign, claim, family, gift, organisation, person};
use crate::{DataLayer, DataLayerConfig, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +0)
}

/// In-memory SQLite lives in a single connection, so the pool must not open a second one.
pub fn test_data_layer_config() -> DataLayerConfig {
    DataLayerConfig {
        max_connections: 1,
        ..Default::default()
    }
}

pub async fn setup_test_data_layer_and_connection() -> (DataLayer, DatabaseConnection) {
    let config = test_data_layer_config();
    let db = db_conn("sqlite::memory:", &config)
        .await
        .expect("failed to open test database");

    (DataLayer::build(db.clone(), &config), db)
}

pub async fn insert_organisation(db: &DatabaseConnection) -> Result<OrganisationId, DbErr> {
    let now = OffsetDateTime::now_utc();

    let organisation = organisation::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set("Charity".to_string()),
        created_date: Set(now),
        last_modified: Set(now),
    }
    .insert(db)
    .await?;

    Ok(organisation.id)
}

pub async fn insert_campaign(
    db: &DatabaseConnection,
    organisation_id: OrganisationId,
    status: CampaignStatus,
) -> Result<CampaignId, DbErr> {
    let now = OffsetDateTime::now_utc();

    let campaign = campaign::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set("Winter drive".to_string()),
        status: Set(status.into()),
        organization_type: Set("CHARITY".to_string()),
        organisation_id: Set(organisation_id),
        created_date: Set(now),
        last_modified: Set(now),
    }
    .insert(db)
    .await?;

    Ok(campaign.id)
}

pub async fn insert_family(
    db: &DatabaseConnection,
    campaign_id: CampaignId,
) -> Result<FamilyId, DbErr> {
    let now = OffsetDateTime::now_utc();

    let family = family::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set("Family".to_string()),
        campaign_id: Set(campaign_id),
        created_date: Set(now),
        last_modified: Set(now),
    }
    .insert(db)
    .await?;

    Ok(family.id)
}

pub async fn insert_person(
    db: &DatabaseConnection,
    family_id: FamilyId,
    identity: Option<&str>,
) -> Result<PersonId, DbErr> {
    let now = OffsetDateTime::now_utc();

    let person = person::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set("Donor".to_string()),
        family_id: Set(family_id),
        identity: Set(identity.map(ToOwned::to_owned)),
        created_date: Set(now),
        last_modified: Set(now),
    }
    .insert(db)
    .await?;

    Ok(person.id)
}

pub async fn insert_gift(
    db: &DatabaseConnection,
    family_id: FamilyId,
    total_quantity: i32,
    claimed_quantity: i32,
) -> Result<GiftId, DbErr> {
    let now = OffsetDateTime::now_utc();

    let gift = gift::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set("Winter coat".to_string()),
        description: Set(Some("Size 128".to_string())),
        family_id: Set(family_id),
        total_quantity: Set(total_quantity),
        claimed_quantity: Set(claimed_quantity),
        created_date: Set(now),
        last_modified: Set(now),
    }
    .insert(db)
    .await?;

    Ok(gift.id)
}

pub async fn get_claimed_quantity(db: &DatabaseConnection, id: &GiftId) -> Result<i32, DbErr> {
    gift::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|gift| gift.claimed_quantity)
        .ok_or(DbErr::RecordNotFound(id.to_string()))
}

pub async fn count_claims(db: &DatabaseConnection, gift_id: &GiftId) -> Result<u64, DbErr> {
    claim::Entity::find()
        .filter(claim::Column::GiftId.eq(gift_id))
        .count(db)
        .await
}

/// Campaign, family, gift and one claimant person
pub struct ClaimFixture {
    pub campaign_id: CampaignId,
    pub family_id: FamilyId,
    pub gift_id: GiftId,
    pub claimant_id: PersonId,
}

pub async fn insert_claim_fixture(
    db: &DatabaseConnection,
    status: CampaignStatus,
    total_quantity: i32,
    claimant_identity: Option<&str>,
) -> Result<ClaimFixture, DbErr> {
    let organisation_id = insert_organisation(db).await?;
    let campaign_id = insert_campaign(db, organisation_id, status).await?;
    let family_id = insert_family(db, campaign_id).await?;
    let gift_id = insert_gift(db, family_id, total_quantity, 0).await?;
    let claimant_id = insert_person(db, family_id, claimant_identity).await?;

    Ok(ClaimFixture {
        campaign_id,
        family_id,
        gift_id,
        claimant_id,
    })
}
