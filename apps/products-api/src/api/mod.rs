//! API routes module

pub mod health;

use axum::{middleware, Router};
use axum_helpers::{
    errors::handlers::not_found, jwt_auth_middleware, openapi_router, request_logging_layer,
    JwtAuth,
};
use core_config::AppInfo;
use domain_products::{handlers, ProductRepository, ProductService};
use std::sync::Arc;

use crate::openapi::ApiDoc;
use health::ReadinessCheck;

/// Assemble the full application router
///
/// Product routes sit behind the JWT gate; `/health`, `/ready` and the
/// OpenAPI document do not. Request logging wraps everything, fallback included.
pub fn build_app<R: ProductRepository + 'static>(
    app_info: AppInfo,
    service: ProductService<R>,
    auth: JwtAuth,
    readiness: Vec<Arc<dyn ReadinessCheck>>,
) -> Router {
    let products = handlers::router(service)
        .route_layer(middleware::from_fn_with_state(auth, jwt_auth_middleware));

    Router::new()
        .nest("/products", products)
        .merge(health::router(app_info, readiness))
        .merge(openapi_router::<ApiDoc>())
        .fallback(not_found)
        .layer(request_logging_layer())
}
