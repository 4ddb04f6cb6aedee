//! HTTP API Layer
//!
//! Read-only JSON views over the claim lifecycle model, served with Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for policies, claims and the dashboard summary
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Response views carrying labels, colour classes, icons and progress
//! - **Error Handling**: Consistent `{error, message}` responses
//!
//! Data is read through a [`PortalDataPort`]; the handlers never know whether
//! it is backed by a fixture document or a remote system.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let port = Arc::new(FixturePortalAdapter::bundled()?);
//! let app = create_router(port, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::PortalDataPort;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, policy, summary};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub port: Arc<dyn PortalDataPort>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `port` - Source of policies and claims
/// * `config` - API configuration
pub fn create_router(port: Arc<dyn PortalDataPort>, config: ApiConfig) -> Router {
    let state = AppState { port, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let policy_routes = Router::new()
        .route("/", get(policy::list_policies))
        .route("/:id", get(policy::get_policy));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/:id", get(claims::get_claim));

    let api_routes = Router::new()
        .nest("/policies", policy_routes)
        .nest("/claims", claims_routes)
        .route("/summary", get(summary::get_summary))
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
