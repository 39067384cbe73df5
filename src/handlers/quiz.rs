// src/handlers/quiz.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::AppError,
    models::quiz::{PublicQuizItem, SelectAnswerRequest},
    store::SessionStore,
    utils::session::SessionId,
};

/// Returns the session's quiz paper.
///
/// Items go out as DTOs without the answer or explanation; those only appear
/// in grade verdicts.
pub async fn get_paper(
    State(sessions): State<SessionStore>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    let paper: Vec<PublicQuizItem> = sessions.with_session(session.as_str(), |s| {
        Ok(s.quiz
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| PublicQuizItem::from_item(index, item))
            .collect())
    })?;

    Ok(Json(paper))
}

/// Records the learner's choice for one item, replacing any earlier choice.
pub async fn select_answer(
    State(sessions): State<SessionStore>,
    Extension(session): Extension<SessionId>,
    Json(req): Json<SelectAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    sessions.with_session(session.as_str(), |s| {
        s.quiz.select(req.item_index, &req.option)
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Grades the current selections against the answer key.
///
/// Selections are untouched, so the learner can revise answers and submit
/// again; every call re-grades from scratch.
pub async fn grade_paper(
    State(sessions): State<SessionStore>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    let result = sessions.with_session(session.as_str(), |s| Ok(s.quiz.grade()))?;

    tracing::info!(
        "Quiz graded: {}/{} correct",
        result.correct_count,
        result.total_items
    );

    Ok(Json(result))
}
