// src/handlers/scores.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    content::Content,
    error::AppError,
    models::score::{ScoreListParams, ScoreRecord, SubmitScoreRequest, SummaryResponse},
    store::SessionStore,
    utils::session::SessionId,
};

/// Records a new practice or official score.
///
/// The total is computed server-side from the section scores; out-of-range
/// or off-step input is rejected with 400 and the log is left unchanged.
pub async fn submit_score(
    State(sessions): State<SessionStore>,
    Extension(session): Extension<SessionId>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = sessions.with_session(session.as_str(), |s| s.score_log.append(&req))?;

    tracing::info!(
        "Score recorded: LC {} / RC {} / total {}",
        record.listening,
        record.reading,
        record.total
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// Lists score records.
///
/// Default is entry order (what the trend chart plots). `?sort=date` gives
/// the calendar ordering, descending unless `descending=false`.
pub async fn list_scores(
    State(sessions): State<SessionStore>,
    Extension(session): Extension<SessionId>,
    Query(params): Query<ScoreListParams>,
) -> Result<impl IntoResponse, AppError> {
    let records: Vec<ScoreRecord> = sessions.with_session(session.as_str(), |s| {
        match params.sort.as_deref() {
            None | Some("entry") => Ok(s.score_log.all().to_vec()),
            Some("date") => Ok(s.score_log.sorted_by_date(params.descending.unwrap_or(true))),
            Some(other) => Err(AppError::Validation(format!(
                "Unknown sort order '{}'",
                other
            ))),
        }
    })?;

    Ok(Json(records))
}

/// The most recently entered record. Entry order governs: a backdated entry
/// still becomes the latest one.
pub async fn latest_score(
    State(sessions): State<SessionStore>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    let record = sessions.with_session(session.as_str(), |s| s.score_log.latest().cloned())?;
    Ok(Json(record))
}

/// Sidebar summary: current standing plus the weakness-analysis note.
pub async fn score_summary(
    State(sessions): State<SessionStore>,
    State(content): State<Arc<Content>>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    let current = sessions.with_session(session.as_str(), |s| s.score_log.latest().cloned())?;

    Ok(Json(SummaryResponse {
        current,
        advice: content.advice.clone(),
    }))
}

/// Static per-part accuracy rows backing the bar chart.
pub async fn part_accuracy(State(content): State<Arc<Content>>) -> impl IntoResponse {
    Json(content.part_accuracy.clone())
}
