// src/store/mod.rs
//
// The in-memory state layer. Nothing here knows about HTTP; handlers reach
// it through `SessionStore`.

pub mod quiz_session;
pub mod score_log;
pub mod sessions;

pub use quiz_session::QuizSession;
pub use score_log::ScoreLog;
pub use sessions::{Session, SessionStore};
