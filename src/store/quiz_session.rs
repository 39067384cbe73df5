// src/store/quiz_session.rs

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::quiz::{GradeResult, ItemVerdict, QuizItem};

/// One learner's pass over the fixed quiz bank: the shared items plus this
/// session's selections.
///
/// Grading is a pure read over the current selections. Selections survive
/// grading and may be changed and re-graded; there is no locked state.
#[derive(Debug)]
pub struct QuizSession {
    items: Arc<Vec<QuizItem>>,
    selections: HashMap<usize, String>,
}

impl QuizSession {
    pub fn new(items: Arc<Vec<QuizItem>>) -> Self {
        Self {
            items,
            selections: HashMap::new(),
        }
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Records the selection for one item, overwriting any prior choice.
    /// The index must be in bounds and the option one of the item's options.
    pub fn select(&mut self, item_index: usize, option: &str) -> Result<(), AppError> {
        let item = self.items.get(item_index).ok_or_else(|| {
            AppError::Validation(format!("Item index {} is out of bounds", item_index))
        })?;

        if !item.options.iter().any(|o| o == option) {
            return Err(AppError::Validation(format!(
                "'{}' is not an option for item {}",
                option, item_index
            )));
        }

        self.selections.insert(item_index, option.to_string());
        Ok(())
    }

    /// Compares every item's current selection against the answer key.
    ///
    /// Simple strict string matching; an item with no selection grades
    /// incorrect with a `None` selection in its verdict.
    pub fn grade(&self) -> GradeResult {
        let mut correct_count = 0;

        let verdicts: Vec<ItemVerdict> = self
            .items
            .iter()
            .enumerate()
            .map(|(item_index, item)| {
                let selected = self.selections.get(&item_index).cloned();
                let is_correct = selected.as_deref() == Some(item.answer.as_str());
                if is_correct {
                    correct_count += 1;
                }
                ItemVerdict {
                    item_index,
                    is_correct,
                    selected,
                    correct: item.answer.clone(),
                    explanation: item.explanation.clone(),
                }
            })
            .collect();

        GradeResult {
            correct_count,
            total_items: verdicts.len(),
            verdicts,
        }
    }
}
