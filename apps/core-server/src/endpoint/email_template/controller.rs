use axum::extract::State;

use super::dto::{GetEmailTemplateResponseRestDTO, SeedEmailTemplatesResponseRestDTO};
use crate::dto::response::{OkOrErrorResponse, VecResponse};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/email-template/v1/seed",
    responses(OkOrErrorResponse<SeedEmailTemplatesResponseRestDTO>),
    tag = "email_template_management",
    security(
        ("bearer" = [])
    ),
    summary = "Seed default email templates",
    description = indoc::formatdoc! {"
        Inserts the default email templates that do not exist yet. Existing templates are left
        untouched, so the operation can be repeated safely. Requires an administrator token.
    "},
)]
pub(crate) async fn seed_email_templates(
    state: State<AppState>,
) -> OkOrErrorResponse<SeedEmailTemplatesResponseRestDTO> {
    let result = state
        .core
        .email_template_service
        .seed_default_templates()
        .await;
    OkOrErrorResponse::from_result(result, state, "seeding email templates")
}

#[utoipa::path(
    get,
    path = "/api/email-template/v1",
    responses(OkOrErrorResponse<VecResponse<GetEmailTemplateResponseRestDTO>>),
    tag = "email_template_management",
    security(
        ("bearer" = [])
    ),
    summary = "List email templates",
    description = "Returns all email templates ordered by name.",
)]
pub(crate) async fn get_email_template_list(
    state: State<AppState>,
) -> OkOrErrorResponse<VecResponse<GetEmailTemplateResponseRestDTO>> {
    let result = state
        .core
        .email_template_service
        .get_email_template_list()
        .await;
    OkOrErrorResponse::from_result(result, state, "listing email templates")
}
