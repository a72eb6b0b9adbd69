//! Axum route handler for the Generation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::models::{CareerNode, CareerProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub tree: CareerNode,
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/v1/career-tree/generate
///
/// Requires a valid session. Builds a career tree for the submitted profile.
/// Any generation failure is reported to the caller as a generic error.
pub async fn handle_generate(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    Json(profile): Json<CareerProfile>,
) -> Result<Json<GenerateResponse>, AppError> {
    let profile = profile.sanitized();

    let blank = profile.blank_fields();
    if !blank.is_empty() {
        return Err(AppError::Validation(format!(
            "Please fill in all fields (missing: {})",
            blank.join(", ")
        )));
    }

    let generation_id = Uuid::new_v4();
    let span = info_span!("generate_career_tree", %generation_id, uid = %user.uid);

    info!(
        parent: &span,
        "Generating career tree (degree {} chars, interests {} chars, goals {} chars)",
        profile.degree.len(),
        profile.interests.len(),
        profile.goals.len()
    );

    let tree = state.generator.generate(&profile).instrument(span).await?;

    Ok(Json(GenerateResponse {
        tree,
        generation_id,
        generated_at: Utc::now(),
    }))
}
