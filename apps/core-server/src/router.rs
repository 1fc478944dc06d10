#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Router};
use gift_core::GiftCore;
use gift_core::config::core_config::AppConfig;
use gift_core::proto::cache_invalidator::BroadcastCacheInvalidator;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::cache::spawn_invalidation_consumer;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, claim, email_template, gift, misc};
use crate::middleware::get_http_request_context;
use crate::session::CoreServerSessionProvider;

const CACHE_INVALIDATION_CAPACITY: usize = 256;

pub(crate) struct InternalAppState {
    pub core: GiftCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

/// Serves the REST API on `listener` until a shutdown signal is received.
pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    db_conn: DbConn,
) -> anyhow::Result<()> {
    listener.set_nonblocking(true)?;

    let cache_invalidator = Arc::new(BroadcastCacheInvalidator::new(
        CACHE_INVALIDATION_CAPACITY,
    ));
    let cache_consumer = spawn_invalidation_consumer(cache_invalidator.subscribe());

    let core = GiftCore::new(
        Arc::new(DataLayer::build(db_conn, &config.app.database)),
        config.core,
        Arc::new(CoreServerSessionProvider),
        cache_invalidator,
    )?;

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr()?;
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)?,
        router.into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    cache_consumer.abort();
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let protected = Router::new()
        .route("/api/gift/v1/{id}", get(gift::controller::get_gift))
        .route(
            "/api/gift/v1/{id}/claim",
            post(claim::controller::post_claim).get(claim::controller::get_gift_claims),
        )
        .route(
            "/api/claim/v1/{id}",
            get(claim::controller::get_claim).delete(claim::controller::delete_claim),
        )
        .route(
            "/api/email-template/v1",
            get(email_template::controller::get_email_template_list),
        )
        .route(
            "/api/email-template/v1/seed",
            post(email_template::controller::seed_email_templates),
        )
        .layer(middleware::from_fn(crate::middleware::bearer_check));

    let mut technical_endpoints = Router::new();
    if config.enable_server_info {
        technical_endpoints = technical_endpoints.route("/health", get(misc::health_check));
    }
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    let mut router = Router::new().merge(protected).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let context = get_http_request_context(request);
                info_span!(
                    "http_request",
                    method = context.method,
                    path = context.path,
                    service = "gift-core",
                    RequestId = context.request_id,
                )
            })
            .on_request(|request: &Request<_>, _span: &Span| {
                tracing::debug!(
                    "SERVICE CALL START {} {}",
                    request.method(),
                    request.uri().path()
                )
            })
            .on_failure(|_, _, _: &_| {}) // override default on_failure handler
            .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                tracing::debug!("SERVICE CALL END {}", response.status())
            }),
    );

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(Extension(config))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::gift::controller::get_gift,

            endpoint::claim::controller::post_claim,
            endpoint::claim::controller::get_gift_claims,
            endpoint::claim::controller::get_claim,
            endpoint::claim::controller::delete_claim,

            endpoint::email_template::controller::seed_email_templates,
            endpoint::email_template::controller::get_email_template_list,

            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::gift::dto::GetGiftResponseRestDTO,

                endpoint::claim::dto::ClaimGiftRequestRestDTO,
                endpoint::claim::dto::ClaimGiftResponseRestDTO,
                endpoint::claim::dto::GetClaimResponseRestDTO,

                endpoint::email_template::dto::SeedEmailTemplatesResponseRestDTO,
                endpoint::email_template::dto::GetEmailTemplateResponseRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::ErrorCode,
                crate::dto::error::Cause,

                shared_types::ClaimId,
                shared_types::EmailTemplateId,
                shared_types::FamilyId,
                shared_types::GiftId,
                shared_types::PersonId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "gift_management", description = "Gift management"),
            (name = "claim_management", description = "Claiming and cancelling gifts"),
            (name = "email_template_management", description = "Email template management"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let Some(components) = openapi.components.as_mut() else {
                return;
            };
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Access token"))
                        .build(),
                ),
            );
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = env!("CARGO_PKG_VERSION").to_string();

    docs
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
