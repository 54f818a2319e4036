//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Browser front-end dev servers allowed when no origins are configured
const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Origins allowed to call the API; `None` allows any origin
///
/// `value` is the contents of `BOOKCASE_CORS_ORIGINS`: `*`, or a comma-separated
/// list. Entries that are not valid header values are skipped.
pub fn allowed_origins(value: Option<&str>) -> Option<Vec<HeaderValue>> {
    match value.map(str::trim) {
        Some("*") => None,
        Some(list) => Some(
            list.split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect(),
        ),
        None => Some(DEV_ORIGINS.into_iter().map(HeaderValue::from_static).collect()),
    }
}

/// The API is read-only apart from the theme preference
fn cors_layer(origins: Option<Vec<HeaderValue>>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);
    match origins {
        Some(list) => layer.allow_origin(AllowOrigin::list(list)),
        None => layer.allow_origin(Any),
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let origins = std::env::var("BOOKCASE_CORS_ORIGINS").ok();
    let cors = cors_layer(allowed_origins(origins.as_deref()));

    let api_routes = Router::new()
        // Catalog endpoints
        .route("/books", get(handlers::list_books))
        .route("/books/:id", get(handlers::get_book))
        .route("/authors", get(handlers::list_authors))
        .route("/genres", get(handlers::list_genres))
        // Preferences
        .route(
            "/preferences/theme",
            get(handlers::get_theme).put(handlers::put_theme),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins() {
        assert_eq!(allowed_origins(Some(" * ")), None);

        let listed = allowed_origins(Some("https://books.example, http://localhost:8080")).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], "https://books.example");

        let defaults = allowed_origins(None).unwrap();
        assert_eq!(defaults, vec!["http://localhost:5173", "http://127.0.0.1:5173"]);
    }
}
