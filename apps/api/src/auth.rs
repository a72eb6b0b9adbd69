//! Session authentication for the generation endpoint.
//!
//! `SessionVerifier` is pluggable and carried in `AppState` as `Arc<dyn SessionVerifier>`.
//! Handlers opt in by taking an `AuthenticatedUser` argument. There is no bypass.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// Resolves a bearer token to a user id.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// `Ok(None)` means the token is not a valid session.
    async fn verify(&self, token: &str) -> Result<Option<String>>;
}

/// Fixed token table, loaded from `CAREERPAD_SESSION_TOKENS`.
pub struct StaticSessionVerifier {
    tokens: HashMap<String, String>,
}

impl StaticSessionVerifier {
    pub fn new(tokens: HashMap<String, String>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl SessionVerifier for StaticSessionVerifier {
    async fn verify(&self, token: &str) -> Result<Option<String>> {
        Ok(self.tokens.get(token).cloned())
    }
}

/// The caller of a handler that requires a signed-in user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub uid: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                debug!("Request has no readable Authorization header");
                AppError::Unauthorized
            })?;

        let token = bearer_token(header).ok_or_else(|| {
            debug!("Authorization header is not a bearer token");
            AppError::Unauthorized
        })?;

        match state.sessions.verify(token).await? {
            Some(uid) => Ok(AuthenticatedUser { uid }),
            None => {
                warn!("Rejected request with unknown session token");
                Err(AppError::Unauthorized)
            }
        }
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
