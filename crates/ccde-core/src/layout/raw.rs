//! Conversion of a parsed YAML/JSON document into a typed [`LayoutSpec`].
//!
//! A mapping is a container when it has a `type` key, whatever its value, and
//! a pane otherwise. Checks run pre-order (container before its children) and
//! stop at the first failure:
//!
//! 1. the document has a `layout`
//! 2. every container `type` is `horizontal` or `vertical`
//! 3. every container has a `panes` array
//! 4. every `ratio` has one entry per pane
//!
//! The single-focus rule runs on the typed tree afterwards.
//!
//! Documents are held as `serde_yaml::Value` whatever the source format, so
//! YAML-only numbers such as `.nan` survive until the ratio arithmetic.

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::errors::LayoutError;
use super::types::{ContainerSpec, LayoutNode, LayoutSpec, PaneSpec, SplitDirection};
use super::validation::{ROOT_PATH, child_path, validate_focus};

/// Convert and validate a raw layout document.
///
/// # Errors
///
/// Returns the first structural violation found, see the module docs.
pub fn parse_layout(document: &Value) -> Result<LayoutSpec, LayoutError> {
    let root = document.as_mapping();

    let layout = match root.and_then(|map| map.get("layout")) {
        Some(value) if is_truthy(value) => value,
        _ => return Err(LayoutError::MissingLayout),
    };

    let name = optional_string(root, "name", "document")?;
    let layout = container_from_value(layout, ROOT_PATH)?;
    validate_focus(&layout)?;

    debug!(
        event = "core.layout.parse_completed",
        name = ?name,
        panes = layout.pane_count()
    );

    Ok(LayoutSpec { name, layout })
}

/// Run every check without keeping the converted tree.
pub fn validate_document(document: &Value) -> Result<(), LayoutError> {
    parse_layout(document).map(|_| ())
}

fn container_from_value(value: &Value, path: &str) -> Result<ContainerSpec, LayoutError> {
    let map = value.as_mapping();

    let kind = map.and_then(|m| m.get("type"));
    let direction = kind
        .and_then(Value::as_str)
        .and_then(SplitDirection::parse)
        .ok_or_else(|| LayoutError::InvalidContainerType {
            path: path.to_string(),
            found: describe(kind),
        })?;

    let panes = map
        .and_then(|m| m.get("panes"))
        .and_then(Value::as_sequence)
        .ok_or_else(|| LayoutError::MissingPanes {
            path: path.to_string(),
        })?;

    let ratio = match map.and_then(|m| m.get("ratio")) {
        None | Some(Value::Null) => None,
        Some(Value::Sequence(entries)) => {
            if entries.len() != panes.len() {
                return Err(LayoutError::RatioLengthMismatch {
                    path: path.to_string(),
                    ratio_len: entries.len(),
                    panes_len: panes.len(),
                });
            }
            Some(ratio_weights(entries, path)?)
        }
        Some(other) => {
            return Err(LayoutError::InvalidField {
                path: path.to_string(),
                field: "ratio".to_string(),
                message: format!("expected an array of numbers, found {}", kind_of(other)),
            });
        }
    };

    let mut children = Vec::with_capacity(panes.len());
    for (index, child) in panes.iter().enumerate() {
        children.push(node_from_value(child, &child_path(path, index))?);
    }

    Ok(ContainerSpec {
        direction,
        panes: children,
        ratio,
        focus: is_focused(map),
    })
}

fn node_from_value(value: &Value, path: &str) -> Result<LayoutNode, LayoutError> {
    let Some(map) = value.as_mapping() else {
        return Err(LayoutError::InvalidField {
            path: path.to_string(),
            field: "panes".to_string(),
            message: format!(
                "expected a pane or container mapping, found {}",
                kind_of(value)
            ),
        });
    };

    if map.contains_key("type") {
        return container_from_value(value, path).map(LayoutNode::Container);
    }

    Ok(LayoutNode::Pane(PaneSpec {
        name: optional_string(Some(map), "name", path)?,
        command: optional_string(Some(map), "command", path)?,
        focus: is_focused(Some(map)),
    }))
}

fn ratio_weights(entries: &[Value], path: &str) -> Result<Vec<f64>, LayoutError> {
    entries
        .iter()
        .map(|entry| {
            entry.as_f64().ok_or_else(|| LayoutError::InvalidField {
                path: path.to_string(),
                field: "ratio".to_string(),
                message: format!("expected a number, found {}", kind_of(entry)),
            })
        })
        .collect()
}

fn optional_string(
    map: Option<&Mapping>,
    field: &str,
    path: &str,
) -> Result<Option<String>, LayoutError> {
    match map.and_then(|m| m.get(field)) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(LayoutError::InvalidField {
            path: path.to_string(),
            field: field.to_string(),
            message: format!("expected a string, found {}", kind_of(other)),
        }),
    }
}

/// Only a literal boolean `true` marks a node as focused.
fn is_focused(map: Option<&Mapping>) -> bool {
    matches!(map.and_then(|m| m.get("focus")), Some(Value::Bool(true)))
}

/// Falsy values (null, false, 0, "") count as a missing `layout`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}

fn describe(kind: Option<&Value>) -> String {
    match kind {
        None => "no type".to_string(),
        Some(Value::String(s)) => format!("'{s}'"),
        Some(other) => kind_of(other).to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "an array",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
