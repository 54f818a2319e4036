//! Theme preference handlers

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use bookcase_core::storage::{load_theme, save_theme, PreferenceStore};
use bookcase_core::{PreferenceError, Theme};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    /// Whether the client prefers a dark colour scheme
    #[serde(default)]
    pub prefers_dark: bool,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Run a blocking store operation off the async worker threads
async fn with_store<T, F>(store: Arc<dyn PreferenceStore>, op: F) -> Result<T, PreferenceError>
where
    T: Send + 'static,
    F: FnOnce(&dyn PreferenceStore) -> Result<T, PreferenceError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| PreferenceError::Backend(e.to_string()))?
}

/// Get the effective theme
pub async fn get_theme(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Json<ThemeResponse> {
    let stored = with_store(state.preferences.clone(), load_theme)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable theme preference: {}", e);
            None
        });

    Json(ThemeResponse {
        theme: Theme::resolve(None, stored, query.prefers_dark),
    })
}

/// Save a new theme
///
/// The saved value is the resolved one, so a client preferring a dark scheme
/// always stores Night.
pub async fn put_theme(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
    Json(request): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, (StatusCode, String)> {
    let requested: Theme = request
        .theme
        .parse()
        .map_err(|e: PreferenceError| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let theme = Theme::resolve(Some(requested), None, query.prefers_dark);

    with_store(state.preferences.clone(), move |store| save_theme(store, theme))
        .await
        .map_err(|e| {
            tracing::error!("Failed to save theme: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(ThemeResponse { theme }))
}
