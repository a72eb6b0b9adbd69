use serde::{Deserialize, Serialize};

/// One stage of a career path. `children` order is display order.
/// Built from model output by `generation::validation::validate_tree`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerNode {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<CareerNode>,
}

impl CareerNode {
    #[cfg(test)]
    pub fn leaf(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CareerNode::node_count).sum::<usize>()
    }
}

/// The three free-text answers a user submits to get a tree.
/// Absent fields deserialize as empty and are reported by `blank_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerProfile {
    pub degree: String,
    pub interests: String,
    pub goals: String,
}

impl CareerProfile {
    /// Strips angle brackets and surrounding whitespace from every field.
    pub fn sanitized(self) -> Self {
        Self {
            degree: sanitize_field(&self.degree),
            interests: sanitize_field(&self.interests),
            goals: sanitize_field(&self.goals),
        }
    }

    /// Names of the fields that are empty, in form order.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("degree", &self.degree),
            ("interests", &self.interests),
            ("goals", &self.goals),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}
