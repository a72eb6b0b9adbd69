//! Axum route handler for the Layout API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::validation::validate_tree;
use crate::layout::{layout_tree, LayoutConfig, TreeLayout};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    /// Checked against the CareerNode shape before layout.
    pub tree: Value,
    pub root_x: Option<f64>,
}

/// POST /api/v1/career-tree/layout
///
/// Converts a career tree into positioned nodes and edges.
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<TreeLayout>, AppError> {
    let tree = validate_tree(&request.tree).map_err(|e| AppError::Validation(e.to_string()))?;

    let config = match request.root_x {
        Some(root_x) if root_x.is_finite() => LayoutConfig {
            root_x,
            ..state.layout.clone()
        },
        Some(_) => return Err(AppError::Validation("root_x must be finite".to_string())),
        None => state.layout.clone(),
    };

    Ok(Json(layout_tree(&tree, &config)))
}
