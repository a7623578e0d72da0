use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::routes::admin::require_admin;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Contestant, ContestantId, Episode, EpisodeId};
use crate::rating::{apply_episode, EpisodeResult};
use crate::storage::{append_episode, load_episodes, load_roster, save_roster};

#[derive(Debug, Serialize)]
pub struct EpisodesResponse {
    pub episodes: Vec<Episode>,
}

/// Episode log, most recent episode number first.
pub async fn list_episodes(
    State(state): State<AppState>,
) -> Result<Json<EpisodesResponse>, ApiError> {
    let mut episodes =
        load_episodes(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;
    episodes.sort_by(|a, b| b.number.cmp(&a.number));

    Ok(Json(EpisodesResponse { episodes }))
}

/// A contestant reference with its display name resolved.
#[derive(Debug, Serialize)]
pub struct ContestantRef {
    pub id: ContestantId,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct EpisodeDetail {
    pub id: EpisodeId,
    pub number: u32,
    pub title: String,
    pub date: String,
    pub winners: Vec<ContestantRef>,
    pub eliminated: Vec<ContestantRef>,
    pub top_performers: Vec<ContestantRef>,
    pub bottom_performers: Vec<ContestantRef>,
}

pub async fn episode_detail(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<EpisodeDetail>, ApiError> {
    let episodes =
        load_episodes(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;
    let episode = episodes
        .into_iter()
        .find(|e| e.id == EpisodeId(id))
        .ok_or_else(|| ApiError::NotFound(format!("episode {}", id)))?;

    let roster = load_roster(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(EpisodeDetail {
        id: episode.id,
        number: episode.number,
        title: episode.title.clone(),
        date: episode.date.to_string(),
        winners: resolve_refs(&roster, &episode.winners),
        eliminated: resolve_refs(&roster, &episode.eliminated),
        top_performers: resolve_refs(&roster, &episode.top_performers),
        bottom_performers: resolve_refs(&roster, &episode.bottom_performers),
    }))
}

/// Resolve ids to name references, dropping ids that match no contestant.
fn resolve_refs(roster: &[Contestant], ids: &[ContestantId]) -> Vec<ContestantRef> {
    ids.iter()
        .filter_map(|id| {
            roster.iter().find(|c| c.id == *id).map(|c| ContestantRef {
                id: c.id,
                name: c.name.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct SubmitEpisodeRequest {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub winners: Vec<ContestantId>,
    #[serde(default)]
    pub eliminated: Vec<ContestantId>,
    #[serde(default)]
    pub top_performers: Vec<ContestantId>,
    #[serde(default)]
    pub bottom_performers: Vec<ContestantId>,
}

/// One contestant's rating movement from a submitted episode.
#[derive(Debug, Serialize)]
pub struct RatingChange {
    pub contestant_id: ContestantId,
    pub name: String,
    pub old_rating: i64,
    pub new_rating: i64,
    pub delta: i64,
}

#[derive(Debug, Serialize)]
pub struct SubmitEpisodeResponse {
    pub episode: Episode,
    pub changes: Vec<RatingChange>,
}

/// Record an episode: run the rating engine over the stored roster and
/// persist both the updated roster and the episode itself.
pub async fn submit_episode(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SubmitEpisodeRequest>,
) -> Result<(StatusCode, Json<SubmitEpisodeResponse>), ApiError> {
    require_admin(&headers, &state)?;

    if req.title.trim().is_empty() {
        return Err(ApiError::BadRequest("episode title is required".to_string()));
    }

    // One submission at a time: the engine expects the caller to serialize.
    let _guard = state.submit_lock.lock().await;

    let roster = load_roster(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;
    let episodes =
        load_episodes(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;

    let episode = Episode::new(
        EpisodeId::next(episodes.iter().map(|e| e.id)),
        req.number,
        req.title.trim().to_string(),
        chrono::Utc::now().date_naive(),
    )
    .with_winners(req.winners)
    .with_eliminated(req.eliminated)
    .with_top_performers(req.top_performers)
    .with_bottom_performers(req.bottom_performers);

    let updated = apply_episode(&roster, &EpisodeResult::from(&episode));

    // Touched contestants are exactly those whose history grew.
    let changes: Vec<RatingChange> = roster
        .iter()
        .zip(updated.iter())
        .filter(|(old, new)| new.rating_history.len() > old.rating_history.len())
        .map(|(old, new)| RatingChange {
            contestant_id: new.id,
            name: new.name.clone(),
            old_rating: old.current_rating,
            new_rating: new.current_rating,
            delta: new.current_rating - old.current_rating,
        })
        .collect();

    save_roster(&state.storage, &updated).map_err(|e| ApiError::Internal(e.to_string()))?;
    append_episode(&state.storage, &episode)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(
        "Recorded episode {} ({}): {} contestants adjusted",
        episode.number,
        episode.title,
        changes.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitEpisodeResponse { episode, changes }),
    ))
}
