//! Career Tree Generator — turns a profile into a validated `CareerNode` tree.
//!
//! Flow: build prompt → single LLM call → strip code fences → parse JSON →
//!       validate shape → return tree.
//!
//! Every failure is logged here with its detail. Callers outside this module
//! only surface a generic message (see `AppError::Llm`).

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::prompts::CAREER_TREE_PROMPT_TEMPLATE;
use crate::generation::validation::{validate_tree, TreeShapeError};
use crate::llm_client::prompts::{ADVISOR_PERSONA, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{strip_json_fences, LlmClient, LlmError, MODEL};
use crate::models::{CareerNode, CareerProfile};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("upstream call failed: {0}")]
    UpstreamCallFailed(#[source] LlmError),

    #[error("completion had no content")]
    EmptyResponse,

    #[error("completion is not valid JSON: {0}")]
    MalformedTreeResponse(#[source] serde_json::Error),

    #[error("completion does not match the career tree shape: {0}")]
    InvalidTree(#[from] TreeShapeError),
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => GenerationError::EmptyResponse,
            other => GenerationError::UpstreamCallFailed(other),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Llm(err.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces a career tree for a profile.
///
/// Carried in `AppState` as `Arc<dyn CareerTreeGenerator>`.
#[async_trait]
pub trait CareerTreeGenerator: Send + Sync {
    async fn generate(&self, profile: &CareerProfile) -> Result<CareerNode, GenerationError>;
}

/// Production generator backed by the chat-completion endpoint.
pub struct LlmTreeGenerator {
    llm: LlmClient,
}

impl LlmTreeGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CareerTreeGenerator for LlmTreeGenerator {
    async fn generate(&self, profile: &CareerProfile) -> Result<CareerNode, GenerationError> {
        let prompt = build_career_tree_prompt(profile);
        debug!("Career tree prompt:\n{prompt}");

        info!(
            "Calling completion endpoint (model: {MODEL}, api key present: {}, length {})",
            self.llm.api_key_len() > 0,
            self.llm.api_key_len()
        );

        let raw = self.llm.complete(&prompt).await.map_err(|e| {
            warn!("Completion call failed: {e}");
            GenerationError::from(e)
        })?;
        debug!("Raw completion: {raw}");

        let tree = parse_tree_response(&raw).map_err(|e| {
            warn!("Failed to parse career tree from completion: {e}");
            warn!("Raw completion for debugging: {raw}");
            e
        })?;

        info!("Career tree generated with {} nodes", tree.node_count());
        Ok(tree)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt construction
// ────────────────────────────────────────────────────────────────────────────

/// Builds the career tree prompt, embedding each profile field verbatim.
pub fn build_career_tree_prompt(profile: &CareerProfile) -> String {
    fill_template(
        CAREER_TREE_PROMPT_TEMPLATE,
        &[
            ("advisor_persona", ADVISOR_PERSONA),
            ("degree", &profile.degree),
            ("interests", &profile.interests),
            ("goals", &profile.goals),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Single-pass `{key}` substitution. Inserted values are never re-scanned, and
/// braces that do not name a known key are copied through untouched.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let matched = values.iter().find_map(|(key, value)| {
            tail.strip_prefix('{')
                .and_then(|t| t.strip_prefix(*key))
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });

        match matched {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Response parsing
// ────────────────────────────────────────────────────────────────────────────

/// Strips code fences, parses JSON, and validates the CareerNode shape.
/// Never returns a partially parsed tree.
pub fn parse_tree_response(raw: &str) -> Result<CareerNode, GenerationError> {
    let cleaned = strip_json_fences(raw);
    let value: Value =
        serde_json::from_str(cleaned).map_err(GenerationError::MalformedTreeResponse)?;
    Ok(validate_tree(&value)?)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
