use axum::handler::HandlerWithoutStateExt;
use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer, Config};
use crate::handlers::{bookings, events, health_check, method_not_allowed, not_found};
use crate::state::AppState;

/// API routes first; anything else is looked up in the client's static
/// directory and ends in a JSON 404 when nothing matches.
pub fn create_routes(state: AppState, config: &Config) -> Router {
    let static_files = ServeDir::new(&config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    let router = Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route(
            "/events",
            get(events::list_events).fallback(method_not_allowed),
        )
        .route(
            "/events/:id",
            get(events::get_event).fallback(method_not_allowed),
        )
        .route(
            "/bookings",
            get(bookings::list_bookings)
                .post(bookings::create_booking)
                .fallback(method_not_allowed),
        )
        .route(
            "/bookings/user/:email",
            get(bookings::list_user_bookings).fallback(method_not_allowed),
        )
        .with_state(state)
        .fallback_service(static_files);

    apply_security_headers(router, config.production)
        .layer(create_cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}
