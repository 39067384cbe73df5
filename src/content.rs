// src/content.rs

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{
    quiz::QuizItem,
    schedule::ExamDate,
    score::{Category, PartAccuracy, ScoreRecord},
};

/// The static weakness-analysis note shown in the sidebar. Fixed copy, not
/// derived from the score log.
#[derive(Debug, Clone, Serialize)]
pub struct StudyAdvice {
    pub listening: String,
    pub reading: String,
    pub recommendation: String,
}

/// Everything the dashboard serves that is fixed at startup: the seed score
/// record, the quiz bank, the exam calendar, the advice note and the
/// per-part accuracy table.
///
/// All of it is injected into [`crate::state::AppState`] as one value, so a
/// deployment with different content swaps this out in one place instead of
/// forking the handlers.
#[derive(Debug)]
pub struct Content {
    pub seed_record: ScoreRecord,
    pub quiz_bank: Arc<Vec<QuizItem>>,
    pub schedule: Vec<ExamDate>,
    pub advice: StudyAdvice,
    pub part_accuracy: Vec<PartAccuracy>,
}

impl Content {
    /// The built-in content set: a 760-point learner (LC 400 / RC 360, the
    /// 2024-12-04 official sitting), five Part 5 grammar items, and the
    /// 2025 first-half exam calendar.
    pub fn builtin() -> Self {
        Self {
            seed_record: ScoreRecord {
                date: date(2024, 12, 4),
                category: Category::Official,
                listening: 400,
                reading: 360,
                total: 760,
            },
            quiz_bank: Arc::new(builtin_quiz_bank()),
            schedule: vec![
                ExamDate {
                    exam_date: date(2025, 1, 12),
                    results_date: date(2025, 1, 22),
                },
                ExamDate {
                    exam_date: date(2025, 2, 9),
                    results_date: date(2025, 2, 19),
                },
                ExamDate {
                    exam_date: date(2025, 2, 23),
                    results_date: date(2025, 3, 5),
                },
            ],
            advice: StudyAdvice {
                listening: "Tends to miss key words in the longer Part 3 and 4 passages."
                    .to_string(),
                reading: "Grammar fundamentals are solid, but time runs short on the linked Part 7 passages."
                    .to_string(),
                recommendation: "Pair the five daily quiz items with ten-minute timed Part 5 drills."
                    .to_string(),
            },
            part_accuracy: [90, 85, 70, 65, 80, 75, 60]
                .iter()
                .enumerate()
                .map(|(i, &accuracy)| PartAccuracy {
                    part: format!("P{}", i + 1),
                    accuracy,
                })
                .collect(),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date literal")
}

fn builtin_quiz_bank() -> Vec<QuizItem> {
    vec![
        QuizItem {
            prompt: "The manager _______ the proposal before the meeting started.".to_string(),
            options: owned(&["reviews", "reviewed", "reviewing", "has reviewed"]),
            answer: "reviewed".to_string(),
            explanation: "The 'before' clause is in the past tense, so the main clause takes the simple past 'reviewed'."
                .to_string(),
        },
        QuizItem {
            prompt: "Please handle the glass ornaments _______.".to_string(),
            options: owned(&["careful", "carefulness", "carefully", "caring"]),
            answer: "carefully".to_string(),
            explanation: "An adverb is needed to modify the verb 'handle', so 'carefully' is correct."
                .to_string(),
        },
        QuizItem {
            prompt: "All employees must submit _______ expense reports by Friday.".to_string(),
            options: owned(&["they", "their", "them", "theirs"]),
            answer: "their".to_string(),
            explanation: "A possessive adjective is required before the noun phrase 'expense reports'."
                .to_string(),
        },
        QuizItem {
            prompt: "The new security system is _______ more reliable than the old one.".to_string(),
            options: owned(&["very", "much", "so", "too"]),
            answer: "much".to_string(),
            explanation: "Only 'much' can intensify a comparative form like 'more reliable'.".to_string(),
        },
        QuizItem {
            prompt: "_______ the heavy rain, the outdoor event proceeded as scheduled.".to_string(),
            options: owned(&["Despite", "Although", "Because", "However"]),
            answer: "Despite".to_string(),
            explanation: "A preposition is needed before the noun phrase 'the heavy rain'; 'Although' would require a clause."
                .to_string(),
        },
    ]
}

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}
