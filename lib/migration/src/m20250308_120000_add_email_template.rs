use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

const UNIQUE_EMAIL_TEMPLATE_NAME_INDEX: &str = "index-EmailTemplate-Name-Unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailTemplate::Table)
                    .col(
                        ColumnDef::new(EmailTemplate::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmailTemplate::Name).string().not_null())
                    .col(ColumnDef::new(EmailTemplate::Subject).string().not_null())
                    .col(ColumnDef::new(EmailTemplate::Body).text().not_null())
                    .col(
                        ColumnDef::new(EmailTemplate::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(EmailTemplate::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailTemplate::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_EMAIL_TEMPLATE_NAME_INDEX)
                    .table(EmailTemplate::Table)
                    .col(EmailTemplate::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum EmailTemplate {
    Table,
    Id,
    Name,
    Subject,
    Body,
    IsDefault,
    CreatedDate,
    LastModified,
}
