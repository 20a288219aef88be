use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::cancel_registration::cancel_registration;
use super::handlers::create_event::create_event;
use super::handlers::delete_event::delete_event;
use super::handlers::get_event::get_event;
use super::handlers::list_events::list_events;
use super::handlers::login::login;
use super::handlers::register_for_event::register_for_event;
use super::handlers::signup::signup;
use super::handlers::update_event::update_event;
use super::middleware::authenticate as auth_middleware;
use crate::domain::event::ports::EventServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared, immutable state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub event_service: Arc<dyn EventServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    event_service: Arc<dyn EventServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        event_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event));

    let protected_routes = Router::new()
        .route("/events", post(create_event))
        .route("/events/:id", put(update_event).delete(delete_event))
        .route("/events/:id/register", post(register_for_event))
        .route("/events/:id/cancel", delete(cancel_registration))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
