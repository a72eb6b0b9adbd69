//! Shape validation for model-produced career trees.
//!
//! The completion is parsed into a `serde_json::Value` first and then walked here,
//! so a bad node is reported with its location (e.g. `tree.children[1].title`)
//! instead of a bare serde message.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::CareerNode;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeShapeError {
    #[error("{path}: expected an object")]
    NotAnObject { path: String },

    #[error("{path}: missing or empty title")]
    MissingTitle { path: String },

    #[error("{path}: expected {expected}")]
    WrongType { path: String, expected: &'static str },
}

/// Validates `value` against the CareerNode shape and converts it.
///
/// - `title`: required non-empty string (`name` is accepted when `title` is absent)
/// - `description`: optional string, `null` treated as absent
/// - `children`: optional array of nodes, `null` treated as empty
/// - any other keys are ignored
pub fn validate_tree(value: &Value) -> Result<CareerNode, TreeShapeError> {
    validate_node(value, "tree")
}

fn validate_node(value: &Value, path: &str) -> Result<CareerNode, TreeShapeError> {
    let object = value.as_object().ok_or_else(|| TreeShapeError::NotAnObject {
        path: path.to_string(),
    })?;

    let title = validate_title(object, path)?;

    let description = match object.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(TreeShapeError::WrongType {
                path: format!("{path}.description"),
                expected: "a string",
            })
        }
    };

    let children = match object.get("children") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, child)| validate_node(child, &format!("{path}.children[{i}]")))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(TreeShapeError::WrongType {
                path: format!("{path}.children"),
                expected: "an array",
            })
        }
    };

    Ok(CareerNode {
        title,
        description,
        children,
    })
}

fn validate_title(object: &Map<String, Value>, path: &str) -> Result<String, TreeShapeError> {
    let (key, raw) = match object.get("title") {
        Some(v) if !v.is_null() => ("title", v),
        _ => match object.get("name") {
            Some(v) if !v.is_null() => ("name", v),
            _ => {
                return Err(TreeShapeError::MissingTitle {
                    path: path.to_string(),
                })
            }
        },
    };

    match raw {
        Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
        Value::String(_) => Err(TreeShapeError::MissingTitle {
            path: path.to_string(),
        }),
        _ => Err(TreeShapeError::WrongType {
            path: format!("{path}.{key}"),
            expected: "a string",
        }),
    }
}
