use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::User,
};

#[cfg(test)]
use mockall::automock;

/// Outcome of a successful sign-in against the external auth service.
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub user: User,
    pub access_token: String,
}

/// Boundary to the external auth service. Failures are classified here so
/// call sites only ever see typed auth errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> AppResult<()>;
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession>;
    async fn sign_out(&self, access_token: &str) -> AppResult<()>;
}

pub struct SupabaseAuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: SupabaseUser,
}

#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: String,
    email: Option<String>,
}

impl SupabaseAuthClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            api_key: config.supabase_key.clone(),
        }
    }
}

#[async_trait]
impl AuthClient for SupabaseAuthClient {
    async fn sign_up(&self, email: &str, password: &str) -> AppResult<()> {
        let response = self
            .http
            .post(format!("{}/auth/v1/signup", self.base_url))
            .header("apikey", self.api_key.expose_secret())
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| {
                log::warn!("Sign-up request failed: {}", e);
                AppError::Auth("Could not create account".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("Sign-up rejected ({}): {}", status, body);
            return Err(AppError::Auth("Could not create account".to_string()));
        }

        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        // Any failure collapses to one generic message: wrong password and
        // unknown user must be indistinguishable to the caller.
        let invalid_login = || AppError::Auth("Invalid email or password".to_string());

        let response = self
            .http
            .post(format!(
                "{}/auth/v1/token?grant_type=password",
                self.base_url
            ))
            .header("apikey", self.api_key.expose_secret())
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| {
                log::warn!("Sign-in request failed: {}", e);
                invalid_login()
            })?;

        if !response.status().is_success() {
            log::warn!("Sign-in rejected with status {}", response.status());
            return Err(invalid_login());
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            log::warn!("Sign-in response could not be parsed: {}", e);
            invalid_login()
        })?;

        let user_email = token.user.email.unwrap_or_else(|| email.to_string());
        Ok(AuthSession {
            user: User::new(&token.user.id, &user_email),
            access_token: token.access_token,
        })
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let response = self
            .http
            .post(format!("{}/auth/v1/logout", self.base_url))
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Sign-out request failed: {}", e);
                AppError::Auth("Sign out failed".to_string())
            })?;

        if !response.status().is_success() {
            log::warn!("Sign-out rejected with status {}", response.status());
            return Err(AppError::Auth("Sign out failed".to_string()));
        }

        Ok(())
    }
}
