use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::routes::admin::require_admin;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{self, StandingsEntry};
use crate::models::{Contestant, ContestantId};
use crate::storage::{load_episodes, load_roster, save_roster};

#[derive(Debug, Serialize)]
pub struct ContestantsResponse {
    pub contestants: Vec<Contestant>,
}

pub async fn list_contestants(
    State(state): State<AppState>,
) -> Result<Json<ContestantsResponse>, ApiError> {
    let contestants =
        load_roster(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(ContestantsResponse { contestants }))
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingsEntry>,
}

pub async fn standings(
    State(state): State<AppState>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let roster = load_roster(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;
    let episodes =
        load_episodes(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(StandingsResponse {
        standings: calculate::standings(&roster, &episodes),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateContestantRequest {
    pub name: String,
    pub image_url: Option<String>,
    /// Starting rating; defaults to the configured initial rating.
    pub initial_rating: Option<i64>,
}

pub async fn create_contestant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateContestantRequest>,
) -> Result<(StatusCode, Json<Contestant>), ApiError> {
    require_admin(&headers, &state)?;

    let name = req.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::BadRequest(
            "contestant name is required".to_string(),
        ));
    }

    // Roster writes share the episode-submission lock.
    let _guard = state.submit_lock.lock().await;

    let mut roster =
        load_roster(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;

    let id = ContestantId::next(roster.iter().map(|c| c.id));
    let initial_rating = req
        .initial_rating
        .unwrap_or(state.config.rating.initial_rating);

    let mut contestant = Contestant::new(id, name, initial_rating);
    if let Some(url) = req.image_url {
        contestant = contestant.with_image_url(url);
    }

    roster.push(contestant.clone());
    save_roster(&state.storage, &roster).map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("Added contestant {} ({})", contestant.name, contestant.id);
    Ok((StatusCode::CREATED, Json(contestant)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::build_router;
    use crate::api::routes::admin::ADMIN_PASSWORD_HEADER;
    use crate::config::AppConfig;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn setup_test_state(dir: &std::path::Path) -> AppState {
        let mut config = AppConfig::default();
        config.data_dir = dir.to_path_buf();
        AppState::new(config)
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn post_json(
        app: axum::Router,
        uri: &str,
        body: &str,
        password: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(pw) = password {
            builder = builder.header(ADMIN_PASSWORD_HEADER, pw);
        }
        let resp = app
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_list_contestants_empty() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let state = setup_test_state(temp_dir.path());
        let app = build_router(state);

        let (status, json) = get_json(app, "/api/contestants").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["contestants"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_create_contestant_requires_admin() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let state = setup_test_state(temp_dir.path());
        let app = build_router(state);

        let (status, json) =
            post_json(app, "/api/contestants", r#"{"name":"Chef Elena"}"#, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_create_contestant() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let state = setup_test_state(temp_dir.path());

        let (status, json) = post_json(
            build_router(state.clone()),
            "/api/contestants",
            r#"{"name":"Chef Elena","image_url":"/img/elena.png"}"#,
            Some("admin123"),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Chef Elena");
        assert_eq!(json["current_rating"], 1500);
        assert_eq!(json["rating_history"], serde_json::json!([1500]));

        let (status, json) = get_json(build_router(state), "/api/contestants").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["contestants"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_contestant_custom_rating_and_sequential_ids() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let state = setup_test_state(temp_dir.path());

        post_json(
            build_router(state.clone()),
            "/api/contestants",
            r#"{"name":"Chef Elena"}"#,
            Some("admin123"),
        )
        .await;
        let (status, json) = post_json(
            build_router(state),
            "/api/contestants",
            r#"{"name":"Chef Farid","initial_rating":1400}"#,
            Some("admin123"),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["id"], 2);
        assert_eq!(json["initial_rating"], 1400);
        assert_eq!(json["current_rating"], 1400);
    }

    #[tokio::test]
    async fn test_create_contestant_blank_name() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let state = setup_test_state(temp_dir.path());
        let app = build_router(state);

        let (status, json) = post_json(
            app,
            "/api/contestants",
            r#"{"name":"   "}"#,
            Some("admin123"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_standings_orders_by_rating() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let state = setup_test_state(temp_dir.path());
        crate::seed::seed_store(&state.storage).unwrap();

        let (status, json) = get_json(build_router(state), "/api/standings").await;

        assert_eq!(status, StatusCode::OK);
        let standings = json["standings"].as_array().unwrap();
        assert_eq!(standings.len(), 4);
        assert_eq!(standings[0]["name"], "Chef Bianca");
        assert_eq!(standings[0]["rating"], 1532);
        assert_eq!(standings[0]["delta"], 32);
        assert_eq!(standings[3]["name"], "Chef Carlos");
        assert_eq!(standings[3]["eliminated"], Value::Bool(true));
    }
}
