use std::{
    collections::HashMap,
    future::{ready, Ready},
    sync::RwLock,
};

use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::{ExamSession, User},
};

/// Per-session state: the authenticated user plus the exam in progress, if
/// any. One instance per session id; sessions never share state.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub user: User,
    pub access_token: String,
    pub exam: Option<ExamSession>,
}

/// In-memory session registry keyed by opaque session ids. A session id
/// either resolves here (authenticated) or it does not; sign-out removes
/// the entry.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionContext>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, user: User, access_token: String) -> Uuid {
        let session_id = Uuid::new_v4();
        self.write().insert(
            session_id,
            SessionContext {
                user,
                access_token,
                exam: None,
            },
        );
        session_id
    }

    pub fn get(&self, session_id: &Uuid) -> Option<SessionContext> {
        self.read().get(session_id).cloned()
    }

    /// Replaces the exam in progress for a session. Returns false when the
    /// session no longer exists.
    pub fn set_exam(&self, session_id: &Uuid, exam: ExamSession) -> bool {
        match self.write().get_mut(session_id) {
            Some(context) => {
                context.exam = Some(exam);
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, session_id: &Uuid) -> Option<SessionContext> {
        self.write().remove(session_id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, SessionContext>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, SessionContext>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Extractor for the authenticated session in handlers: resolves the bearer
/// session token against the store or rejects with 401.
pub struct CurrentSession {
    pub session_id: Uuid,
    pub context: SessionContext,
}

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(resolve_session(req))
    }
}

fn resolve_session(req: &HttpRequest) -> Result<CurrentSession, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    let session_id = Uuid::parse_str(token)
        .map_err(|_| AppError::Unauthorized("Invalid session token".to_string()))?;

    let context = state
        .session_store
        .get(&session_id)
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    Ok(CurrentSession {
        session_id,
        context,
    })
}
