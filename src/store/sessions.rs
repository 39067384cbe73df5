// src/store/sessions.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::content::Content;
use crate::error::AppError;
use crate::store::{QuizSession, ScoreLog};

/// All state belonging to one logical user session: their score log and
/// their quiz selections. Never shared between sessions.
#[derive(Debug)]
pub struct Session {
    pub score_log: ScoreLog,
    pub quiz: QuizSession,
}

impl Session {
    fn new(content: &Content) -> Self {
        Self {
            score_log: ScoreLog::with_seed(content.seed_record.clone()),
            quiz: QuizSession::new(content.quiz_bank.clone()),
        }
    }
}

/// Map of session id to isolated session state, created lazily on first use.
///
/// Takes the place a database pool would normally occupy in `AppState`.
/// There is no persistence: sessions live exactly as long as the process.
/// Each session sits behind its own Mutex; contention only exists at the map
/// level since one logical user never issues overlapping mutations.
#[derive(Clone)]
pub struct SessionStore {
    content: Arc<Content>,
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<Session>>>>>,
}

impl SessionStore {
    pub fn new(content: Arc<Content>) -> Self {
        Self {
            content,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Runs `f` with exclusive access to the session's state, creating the
    /// session (seed record, fresh quiz) if this id has not been seen yet.
    pub fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Session) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let session = self.entry(session_id)?;
        let mut guard = session
            .lock()
            .map_err(|_| AppError::InternalServerError("Session lock poisoned".to_string()))?;
        f(&mut guard)
    }

    fn entry(&self, session_id: &str) -> Result<Arc<Mutex<Session>>, AppError> {
        {
            let sessions = self
                .sessions
                .read()
                .map_err(|_| AppError::InternalServerError("Session map poisoned".to_string()))?;
            if let Some(session) = sessions.get(session_id) {
                return Ok(session.clone());
            }
        }

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AppError::InternalServerError("Session map poisoned".to_string()))?;
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!("Creating session state for {}", session_id);
                Arc::new(Mutex::new(Session::new(&self.content)))
            })
            .clone();
        Ok(session)
    }
}
