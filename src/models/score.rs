// src/models/score.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::content::StudyAdvice;

/// Whether a record comes from an official proctored sitting or a
/// self-administered practice test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Official,
    Practice,
}

/// One entry in the score log.
///
/// `total` is always `listening + reading`; it is computed on append and
/// never settable by the caller. Records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub date: NaiveDate,
    pub category: Category,
    pub listening: u16,
    pub reading: u16,
    pub total: u16,
}

/// DTO for recording a new score.
///
/// Section scores are TOEIC-scaled: 0 to 495 in steps of 5. Signed fields so
/// an out-of-range negative deserializes and fails validation instead of
/// failing JSON decoding.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitScoreRequest {
    pub date: NaiveDate,
    pub category: Category,
    #[validate(range(min = 0, max = 495), custom(function = validate_step_of_five))]
    pub listening: i32,
    #[validate(range(min = 0, max = 495), custom(function = validate_step_of_five))]
    pub reading: i32,
}

fn validate_step_of_five(score: i32) -> Result<(), validator::ValidationError> {
    if score % 5 != 0 {
        return Err(validator::ValidationError::new("score_not_multiple_of_five"));
    }
    Ok(())
}

/// Query parameters for listing score records.
#[derive(Debug, Deserialize)]
pub struct ScoreListParams {
    /// `date` switches from entry order to calendar order.
    pub sort: Option<String>,
    /// Only meaningful with `sort=date`. Defaults to true (newest first),
    /// the order the results table displays.
    pub descending: Option<bool>,
}

/// Sidebar summary: the learner's current standing plus the static
/// weakness-analysis note.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub current: ScoreRecord,
    pub advice: StudyAdvice,
}

/// One row of the per-part accuracy chart (P1..P7). Static display data.
#[derive(Debug, Clone, Serialize)]
pub struct PartAccuracy {
    pub part: String,
    pub accuracy: u8,
}
