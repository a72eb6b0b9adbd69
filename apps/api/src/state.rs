use std::sync::Arc;

use crate::auth::SessionVerifier;
use crate::generation::generator::CareerTreeGenerator;
use crate::layout::LayoutConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable tree generator. Default: LlmTreeGenerator over the configured endpoint.
    pub generator: Arc<dyn CareerTreeGenerator>,
    /// Pluggable session check. Default: StaticSessionVerifier from CAREERPAD_SESSION_TOKENS.
    pub sessions: Arc<dyn SessionVerifier>,
    /// Spacing constants for the diagram layout.
    pub layout: LayoutConfig,
}
