//! HTTP handlers
//!
//! Handlers stay thin: label normalization, the fallback cascade and
//! rendering all live in the service layer.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::Category;
use crate::style_engine::{self, RECIPES, recipes};
use crate::web::AppState;
use crate::web::responses::{self, HealthResponse};

pub const DETECTED_EMOTION_HEADER: &str = "x-detected-emotion";
pub const WALLPAPER_TIER_HEADER: &str = "x-wallpaper-tier";
pub const MOOD_HEADER: &str = "x-mood";
pub const SEED_HEADER: &str = "x-seed";

#[derive(Debug, Default, Deserialize)]
pub struct EmotionRequest {
    #[serde(default)]
    pub emotion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WallpaperQuery {
    pub emotion: Option<String>,
    pub seed: Option<u64>,
    /// Recipe index or name
    pub style: Option<String>,
}

/// `POST /api/emotion`: run the acquisition cascade for a mood label.
///
/// Bodies that are not JSON, or JSON without an `emotion` field, are served
/// as the default category.
pub async fn emotion(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let label = requested_label(&headers, &body);
    debug!("Emotion request for label {:?}", label);

    let acquisition = match label.as_deref() {
        Some(label) => state.orchestrator.acquire(label).await,
        None => state.orchestrator.acquire_category(Category::DEFAULT).await,
    };

    responses::image(
        "image/jpeg",
        acquisition.bytes,
        &[
            (DETECTED_EMOTION_HEADER, acquisition.category.to_string()),
            (WALLPAPER_TIER_HEADER, acquisition.tier.to_string()),
        ],
    )
}

/// `POST /api/wallpaper`: procedural PNG straight from the style engine
pub async fn wallpaper(
    State(state): State<AppState>,
    Query(query): Query<WallpaperQuery>,
) -> Response {
    let category = Category::normalize(query.emotion.as_deref().unwrap_or_default());
    let recipe = match query.style.as_deref().map(resolve_style).transpose() {
        Ok(recipe) => recipe,
        Err(message) => return responses::bad_request(&message),
    };

    let styles = *state.orchestrator.styles();
    let seed = query.seed;
    let rendered = tokio::task::spawn_blocking(move || {
        let image = match recipe {
            Some(index) => styles.synthesize_with_recipe(category, index, seed)?,
            None => styles.synthesize(category, seed),
        };
        style_engine::encode_png(&image)
    })
    .await
    .map_err(|e| AppError::internal(format!("Render task failed: {e}")))
    .and_then(|result| result);

    match rendered {
        Ok(bytes) => {
            info!("Rendered {} wallpaper (seed {:?}, style {:?})", category, seed, recipe);
            responses::image(
                "image/png",
                bytes,
                &[
                    (MOOD_HEADER, category.to_string()),
                    (
                        SEED_HEADER,
                        seed.map_or_else(|| "random".to_string(), |s| s.to_string()),
                    ),
                ],
            )
        }
        Err(e) => responses::handle_error(e),
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse::healthy(state.orchestrator.stats()))
}

fn requested_label(headers: &HeaderMap, body: &[u8]) -> Option<String> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if !is_json {
        return None;
    }
    serde_json::from_slice::<EmotionRequest>(body)
        .ok()
        .and_then(|request| request.emotion)
}

fn resolve_style(style: &str) -> Result<usize, String> {
    if let Ok(index) = style.trim().parse::<usize>() {
        return if index < RECIPES.len() {
            Ok(index)
        } else {
            Err(format!(
                "Style index {index} out of range (0..{})",
                RECIPES.len()
            ))
        };
    }
    recipes::find(style)
        .map(|(index, _)| index)
        .ok_or_else(|| format!("Unknown style '{style}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn test_label_from_json() {
        assert_eq!(
            requested_label(&json_headers(), br#"{"emotion":"Happy"}"#).as_deref(),
            Some("Happy")
        );
    }

    #[test]
    fn test_label_missing_for_non_json() {
        assert_eq!(requested_label(&HeaderMap::new(), br#"{"emotion":"sad"}"#), None);
        assert_eq!(requested_label(&json_headers(), b"not json"), None);
        assert_eq!(requested_label(&json_headers(), b"{}"), None);
    }

    #[test]
    fn test_resolve_style() {
        assert_eq!(resolve_style("3"), Ok(3));
        assert_eq!(resolve_style("grainy-panels"), Ok(17));
        assert!(resolve_style("20").is_err());
        assert!(resolve_style("oil-paint").is_err());
    }
}
