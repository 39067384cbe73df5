// src/store/score_log.rs

use validator::Validate;

use crate::error::AppError;
use crate::models::score::{ScoreRecord, SubmitScoreRequest};

/// Append-only log of score records for one session.
///
/// Insertion order is entry order, not calendar order: the learner may
/// backfill an old paper test, in which case `latest()` (last entered) and
/// the top of the date-sorted view legitimately diverge. Records are never
/// updated or deleted; the log models a history, not a ledger.
#[derive(Debug, Default)]
pub struct ScoreLog {
    records: Vec<ScoreRecord>,
}

impl ScoreLog {
    /// Starts the log with one seed record, so `latest()` always has
    /// something to return for a fresh session.
    pub fn with_seed(seed: ScoreRecord) -> Self {
        Self {
            records: vec![seed],
        }
    }

    /// Validates the input, computes the total and appends the record.
    ///
    /// Rejected input leaves the log untouched. Returns the record as
    /// stored.
    pub fn append(&mut self, input: &SubmitScoreRequest) -> Result<ScoreRecord, AppError> {
        input.validate()?;

        let record = ScoreRecord {
            date: input.date,
            category: input.category,
            listening: input.listening as u16,
            reading: input.reading as u16,
            total: (input.listening + input.reading) as u16,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// The last-appended record. Entry order governs, not the date field.
    pub fn latest(&self) -> Result<&ScoreRecord, AppError> {
        self.records.last().ok_or(AppError::EmptyLog)
    }

    /// Snapshot in entry order.
    pub fn all(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Snapshot in calendar order. Stable, so same-date records keep their
    /// entry order. Does not reorder the stored log.
    pub fn sorted_by_date(&self, descending: bool) -> Vec<ScoreRecord> {
        let mut records = self.records.clone();
        if descending {
            records.sort_by(|a, b| b.date.cmp(&a.date));
        } else {
            records.sort_by(|a, b| a.date.cmp(&b.date));
        }
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
