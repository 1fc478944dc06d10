use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

const CLAIM_GIFT_ID_INDEX: &str = "index-Claim-GiftId";
const CLAIM_CLAIMANT_CREATED_DATE_INDEX: &str = "index-Claim-ClaimantId-CreatedDate";
const PERSON_IDENTITY_INDEX: &str = "index-Person-Identity";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organisation::Table)
                    .col(
                        ColumnDef::new(Organisation::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Organisation::Name).string().not_null())
                    .col(
                        ColumnDef::new(Organisation::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Organisation::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .col(
                        ColumnDef::new(Campaign::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaign::Name).string().not_null())
                    .col(ColumnDef::new(Campaign::Status).string().not_null())
                    .col(ColumnDef::new(Campaign::OrganizationType).string().not_null())
                    .col(ColumnDef::new(Campaign::OrganisationId).uuid_char().not_null())
                    .col(
                        ColumnDef::new(Campaign::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Campaign::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Campaign-OrganisationId")
                            .from_tbl(Campaign::Table)
                            .from_col(Campaign::OrganisationId)
                            .to_tbl(Organisation::Table)
                            .to_col(Organisation::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Family::Table)
                    .col(
                        ColumnDef::new(Family::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Family::Name).string().not_null())
                    .col(ColumnDef::new(Family::CampaignId).uuid_char().not_null())
                    .col(
                        ColumnDef::new(Family::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Family::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Family-CampaignId")
                            .from_tbl(Family::Table)
                            .from_col(Family::CampaignId)
                            .to_tbl(Campaign::Table)
                            .to_col(Campaign::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .col(
                        ColumnDef::new(Person::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Person::Name).string().not_null())
                    .col(ColumnDef::new(Person::FamilyId).uuid_char().not_null())
                    .col(ColumnDef::new(Person::Identity).string())
                    .col(
                        ColumnDef::new(Person::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Person::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Person-FamilyId")
                            .from_tbl(Person::Table)
                            .from_col(Person::FamilyId)
                            .to_tbl(Family::Table)
                            .to_col(Family::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(PERSON_IDENTITY_INDEX)
                    .table(Person::Table)
                    .col(Person::Identity)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Gift::Table)
                    .col(
                        ColumnDef::new(Gift::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gift::Name).string().not_null())
                    .col(ColumnDef::new(Gift::Description).text())
                    .col(ColumnDef::new(Gift::FamilyId).uuid_char().not_null())
                    .col(ColumnDef::new(Gift::TotalQuantity).integer().not_null())
                    .col(
                        ColumnDef::new(Gift::ClaimedQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Gift::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Gift::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .check(
                        Expr::col(Gift::ClaimedQuantity)
                            .gte(0)
                            .and(Expr::col(Gift::ClaimedQuantity).lte(Expr::col(Gift::TotalQuantity))),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Gift-FamilyId")
                            .from_tbl(Gift::Table)
                            .from_col(Gift::FamilyId)
                            .to_tbl(Family::Table)
                            .to_col(Family::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Claim::Table)
                    .col(
                        ColumnDef::new(Claim::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Claim::GiftId).uuid_char().not_null())
                    .col(ColumnDef::new(Claim::ClaimantId).uuid_char().not_null())
                    .col(ColumnDef::new(Claim::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(Claim::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .check(Expr::col(Claim::Quantity).gt(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Claim-GiftId")
                            .from_tbl(Claim::Table)
                            .from_col(Claim::GiftId)
                            .to_tbl(Gift::Table)
                            .to_col(Gift::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Claim-ClaimantId")
                            .from_tbl(Claim::Table)
                            .from_col(Claim::ClaimantId)
                            .to_tbl(Person::Table)
                            .to_col(Person::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CLAIM_GIFT_ID_INDEX)
                    .table(Claim::Table)
                    .col(Claim::GiftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CLAIM_CLAIMANT_CREATED_DATE_INDEX)
                    .table(Claim::Table)
                    .col(Claim::ClaimantId)
                    .col(Claim::CreatedDate)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum Organisation {
    Table,
    Id,
    Name,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    Name,
    Status,
    OrganizationType,
    OrganisationId,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub enum Family {
    Table,
    Id,
    Name,
    CampaignId,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Name,
    FamilyId,
    Identity,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub enum Gift {
    Table,
    Id,
    Name,
    Description,
    FamilyId,
    TotalQuantity,
    ClaimedQuantity,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub enum Claim {
    Table,
    Id,
    GiftId,
    ClaimantId,
    Quantity,
    CreatedDate,
}
