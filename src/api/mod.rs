//! HTTP API server

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/health", get(handlers::health).fallback(handlers::fallback))
                .route(
                    "/todos",
                    get(handlers::list_todos)
                        .post(handlers::create_todo)
                        // Unmatched methods answer 404, not 405
                        .fallback(handlers::fallback),
                )
                .route(
                    "/todos/:id",
                    get(handlers::get_todo)
                        .put(handlers::update_todo)
                        .delete(handlers::delete_todo)
                        .fallback(handlers::fallback),
                ),
        )
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("SAMEORIGIN"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("no-referrer"),
                ))
                .layer(CompressionLayer::new())
                // Innermost, so the 500 envelope still passes the layers above
                .layer(CatchPanicLayer::custom(handlers::panic_response)),
        )
}

/// Cross-origin policy.
///
/// A configured frontend origin is allowed exclusively, with credentials.
/// Without one, any origin is allowed; credentials cannot accompany a
/// wildcard origin, so the permissive default omits them.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let configured_origin = config
        .cors
        .frontend_url
        .as_deref()
        .and_then(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable cors.frontend_url");
                None
            }
        });

    match configured_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::permissive(),
    }
}
