use crate::fixtures::{ColumnType, get_schema};

#[tokio::test]
async fn test_db_schema_email_template() {
    let schema = get_schema().await;

    let email_template = schema
        .table("email_template")
        .columns(&[
            "id",
            "name",
            "subject",
            "body",
            "is_default",
            "created_date",
            "last_modified",
        ])
        .index("index-EmailTemplate-Name-Unique", true, &["name"]);
    email_template
        .column("id")
        .r#type(ColumnType::Uuid)
        .nullable(false)
        .primary_key();
    email_template
        .column("body")
        .r#type(ColumnType::Text)
        .nullable(false);
    email_template
        .column("is_default")
        .r#type(ColumnType::Boolean)
        .nullable(false);
}
