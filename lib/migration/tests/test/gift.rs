use crate::fixtures::{ColumnType, get_schema};

#[tokio::test]
async fn test_db_schema_gift() {
    let schema = get_schema().await;

    let gift = schema
        .table("gift")
        .columns(&[
            "id",
            "name",
            "description",
            "family_id",
            "total_quantity",
            "claimed_quantity",
            "created_date",
            "last_modified",
        ])
        .foreign_key("fk-Gift-FamilyId", "family_id", "family", "id")
        .check("claimed_quantity");
    gift.column("id")
        .r#type(ColumnType::Uuid)
        .nullable(false)
        .primary_key();
    gift.column("description")
        .r#type(ColumnType::Text)
        .nullable(true);
    gift.column("total_quantity")
        .r#type(ColumnType::Integer)
        .nullable(false)
        .default(None);
    gift.column("claimed_quantity")
        .r#type(ColumnType::Integer)
        .nullable(false)
        .default(Some("0"));
    gift.column("created_date")
        .r#type(ColumnType::Timestamp)
        .nullable(false);
    gift.column("last_modified")
        .r#type(ColumnType::Timestamp)
        .nullable(false);
}
