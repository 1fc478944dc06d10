use crate::fixtures::{ColumnType, get_schema};

#[tokio::test]
async fn test_db_schema_person() {
    let schema = get_schema().await;

    let person = schema
        .table("person")
        .columns(&[
            "id",
            "name",
            "family_id",
            "identity",
            "created_date",
            "last_modified",
        ])
        .index("index-Person-Identity", false, &["identity"])
        .foreign_key("fk-Person-FamilyId", "family_id", "family", "id");
    person
        .column("id")
        .r#type(ColumnType::Uuid)
        .nullable(false)
        .primary_key();
    person.column("identity").nullable(true);
    person
        .column("family_id")
        .r#type(ColumnType::Uuid)
        .nullable(false);
}

#[tokio::test]
async fn test_db_schema_family_and_campaign() {
    let schema = get_schema().await;

    schema
        .table("family")
        .columns(&["id", "name", "campaign_id", "created_date", "last_modified"])
        .foreign_key("fk-Family-CampaignId", "campaign_id", "campaign", "id");

    schema
        .table("campaign")
        .columns(&[
            "id",
            "name",
            "status",
            "organization_type",
            "organisation_id",
            "created_date",
            "last_modified",
        ])
        .foreign_key(
            "fk-Campaign-OrganisationId",
            "organisation_id",
            "organisation",
            "id",
        )
        .column("status")
        .nullable(false);
}
