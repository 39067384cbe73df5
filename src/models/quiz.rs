// src/models/quiz.rs

use serde::{Deserialize, Serialize};

/// One multiple-choice item from the daily quiz bank.
///
/// Items are fixed at startup and shared by every session. The `answer` and
/// `explanation` fields never leave the server except inside grade verdicts,
/// so clients see items through [`PublicQuizItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    /// The sentence with the blank to fill.
    pub prompt: String,

    /// List of options (e.g., ["reviews", "reviewed", ...]).
    pub options: Vec<String>,

    /// The correct answer; always one of `options`.
    pub answer: String,

    /// Explanation shown with the grade verdict.
    pub explanation: String,
}

/// DTO for sending an item to the client (excludes answer and explanation).
#[derive(Debug, Serialize)]
pub struct PublicQuizItem {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

impl PublicQuizItem {
    pub fn from_item(index: usize, item: &QuizItem) -> Self {
        Self {
            index,
            prompt: item.prompt.clone(),
            options: item.options.clone(),
        }
    }
}

/// DTO for selecting an answer to a single item.
#[derive(Debug, Deserialize)]
pub struct SelectAnswerRequest {
    pub item_index: usize,
    pub option: String,
}

/// Per-item outcome of a grading pass.
#[derive(Debug, Clone, Serialize)]
pub struct ItemVerdict {
    pub item_index: usize,
    pub is_correct: bool,
    /// `None` when the learner never selected an option for this item.
    pub selected: Option<String>,
    pub correct: String,
    pub explanation: String,
}

/// Outcome of grading every item against the answer key.
#[derive(Debug, Serialize)]
pub struct GradeResult {
    pub verdicts: Vec<ItemVerdict>,
    pub correct_count: usize,
    pub total_items: usize,
}
