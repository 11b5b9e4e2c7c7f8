//! Structural checks on a typed layout tree.
//!
//! Direction and `panes` presence are guaranteed by the types; what remains
//! is the per-container ratio length and the single-focus rule.

use super::errors::LayoutError;
use super::types::{ContainerSpec, LayoutNode, LayoutSpec};

/// Path of the root container in error messages.
pub const ROOT_PATH: &str = "layout";

/// Path of the `index`-th child of the container at `parent`.
pub fn child_path(parent: &str, index: usize) -> String {
    format!("{parent}.panes[{index}]")
}

/// Fail if `container` has a ratio whose length differs from its children.
pub fn check_ratio_length(container: &ContainerSpec, path: &str) -> Result<(), LayoutError> {
    match &container.ratio {
        Some(ratio) if ratio.len() != container.panes.len() => {
            Err(LayoutError::RatioLengthMismatch {
                path: path.to_string(),
                ratio_len: ratio.len(),
                panes_len: container.panes.len(),
            })
        }
        _ => Ok(()),
    }
}

/// Validate a typed layout.
///
/// # Errors
///
/// Returns `LayoutError::RatioLengthMismatch` for the first container (in
/// pre-order) whose ratio length differs from its pane count, and
/// `LayoutError::MultipleFocus` when more than one node is focused.
pub fn validate_layout(layout: &LayoutSpec) -> Result<(), LayoutError> {
    validate_ratios(&layout.layout, ROOT_PATH)?;
    validate_focus(&layout.layout)
}

fn validate_ratios(container: &ContainerSpec, path: &str) -> Result<(), LayoutError> {
    check_ratio_length(container, path)?;
    for (index, node) in container.panes.iter().enumerate() {
        if let LayoutNode::Container(child) = node {
            validate_ratios(child, &child_path(path, index))?;
        }
    }
    Ok(())
}

/// Fail when more than one node, pane or container, has `focus` set.
///
/// Paths are the dot-joined child indices from the root (`"1.0"` is the first
/// child of the root's second child). The root itself is reported as `root`.
pub fn validate_focus(root: &ContainerSpec) -> Result<(), LayoutError> {
    let mut focused = Vec::new();
    if root.focus {
        focused.push("root".to_string());
    }
    collect_focused(root, &mut Vec::new(), &mut focused);

    if focused.len() > 1 {
        return Err(LayoutError::MultipleFocus { paths: focused });
    }
    Ok(())
}

fn collect_focused(container: &ContainerSpec, path: &mut Vec<usize>, found: &mut Vec<String>) {
    for (index, node) in container.panes.iter().enumerate() {
        path.push(index);
        if node.focus() {
            let joined: Vec<String> = path.iter().map(ToString::to_string).collect();
            found.push(joined.join("."));
        }
        if let LayoutNode::Container(child) = node {
            collect_focused(child, path, found);
        }
        path.pop();
    }
}
