use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::graphql::graphiql;
use super::handlers::graphql::graphql;
use super::handlers::login::login;
use super::middleware::authenticate;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::graphql::ApiSchema;

pub const LOGIN_ROUTE: &str = "/login";
pub const GRAPHQL_ROUTE: &str = "/graphql";
pub const GRAPHIQL_ROUTE: &str = "/graphiql";

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub schema: ApiSchema,
}

pub fn create_router(auth_service: Arc<dyn AuthServicePort>, schema: ApiSchema) -> Router {
    let state = AppState {
        auth_service,
        schema,
    };

    let public_routes = Router::new()
        .route(LOGIN_ROUTE, post(login))
        .route(GRAPHIQL_ROUTE, get(graphiql));

    let protected_routes = Router::new()
        .route(GRAPHQL_ROUTE, post(graphql))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Authorization headers carry bearer tokens, so they stay out of spans
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
