use serde_json::Value;
use similar_asserts::assert_eq;

use crate::fixtures;
use crate::utils::context::TestContext;

const DEFAULT_TEMPLATES: [&str; 4] = [
    "CAMPAIGN_INVITATION",
    "CLAIM_CANCELLED",
    "CLAIM_CONFIRMATION",
    "GIFT_REMINDER",
];

fn sorted_names(value: &Value) -> Vec<String> {
    let mut names: Vec<String> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|name| name.as_str().unwrap().to_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_seed_email_templates_twice() {
    // GIVEN
    let context = TestContext::new().await;
    let admin = context.api_with_token(fixtures::ADMIN_TOKEN);

    // WHEN
    let first = admin.email_templates.seed().await;
    let second = admin.email_templates.seed().await;

    // THEN
    assert_eq!(first.status(), 200);
    let first = first.json_value().await;
    assert_eq!(sorted_names(&first["created"]), DEFAULT_TEMPLATES);
    assert_eq!(first["skipped"], Value::Array(vec![]));

    assert_eq!(second.status(), 200);
    let second = second.json_value().await;
    assert_eq!(second["created"], Value::Array(vec![]));
    assert_eq!(sorted_names(&second["skipped"]), DEFAULT_TEMPLATES);

    let list = context.api.email_templates.list().await;
    assert_eq!(list.status(), 200);
    let names: Vec<_> = list
        .json_value()
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|template| template["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, DEFAULT_TEMPLATES);
}

#[tokio::test]
async fn test_seed_email_templates_requires_admin() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.email_templates.seed().await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "FORBIDDEN");

    let list = context.api.email_templates.list().await.json_value().await;
    assert_eq!(list, Value::Array(vec![]));
}
