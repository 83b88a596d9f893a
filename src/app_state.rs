use std::sync::Arc;

use crate::{
    auth::{AuthClient, SessionStore, SupabaseAuthClient},
    config::Config,
    repositories::{ResultRepository, SupabaseResultRepository},
    services::{ExamService, GeminiClient, GenerativeClient, ProgressService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session_store: Arc<SessionStore>,
    pub auth_client: Arc<dyn AuthClient>,
    pub exam_service: Arc<ExamService>,
    pub progress_service: Arc<ProgressService>,
    pub result_repository: Arc<dyn ResultRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();

        let auth_client: Arc<dyn AuthClient> =
            Arc::new(SupabaseAuthClient::new(&config, http.clone()));
        let generative_client: Arc<dyn GenerativeClient> =
            Arc::new(GeminiClient::new(&config, http.clone()));
        let result_repository: Arc<dyn ResultRepository> =
            Arc::new(SupabaseResultRepository::new(&config, http));

        Self::from_parts(config, auth_client, generative_client, result_repository)
    }

    /// Wires the state from explicit collaborators; entry point for tests
    /// that substitute in-memory doubles for the external services.
    pub fn from_parts(
        config: Config,
        auth_client: Arc<dyn AuthClient>,
        generative_client: Arc<dyn GenerativeClient>,
        result_repository: Arc<dyn ResultRepository>,
    ) -> Self {
        let exam_service = Arc::new(ExamService::new(generative_client));
        let progress_service = Arc::new(ProgressService::new(result_repository.clone()));

        Self {
            config: Arc::new(config),
            session_store: Arc::new(SessionStore::new()),
            auth_client,
            exam_service,
            progress_service,
            result_repository,
        }
    }
}
