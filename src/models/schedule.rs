// src/models/schedule.rs

use chrono::NaiveDate;
use serde::Serialize;

/// One row of the upcoming exam calendar. Static display data supplied at
/// startup; in a richer system this would come from the test operator's
/// published schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ExamDate {
    pub exam_date: NaiveDate,
    pub results_date: NaiveDate,
}
