use serde_json::Value;
use thiserror::Error;

/// Failure modes of the scratchpad count.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected tree shape at '{path}': {reason}")]
    Shape {
        path: &'static str,
        reason: &'static str,
    },
}

// --- Tree Navigation ---

fn field<'a>(value: &'a Value, name: &str, path: &'static str) -> Result<&'a Value, TreeError> {
    let object = value.as_object().ok_or(TreeError::Shape {
        path,
        reason: "expected a JSON object",
    })?;
    object.get(name).ok_or(TreeError::Shape {
        path,
        reason: "key is missing",
    })
}

fn first<'a>(value: &'a Value, path: &'static str) -> Result<&'a Value, TreeError> {
    let items = value.as_array().ok_or(TreeError::Shape {
        path,
        reason: "expected a JSON array",
    })?;
    items.first().ok_or(TreeError::Shape {
        path,
        reason: "array is empty",
    })
}

/// Counts the scratchpad windows in a sway `get_tree` dump.
///
/// Scratchpad windows live on the hidden `__i3_scratch` workspace, which
/// sway keeps as the first workspace of the first output node, so the count
/// is the length of `nodes[0].nodes[0].floating_nodes`.
pub fn count_scratchpads(text: &str) -> Result<usize, TreeError> {
    let tree: Value = serde_json::from_str(text)?;
    //walk the fixed path: root -> scratch output -> scratch workspace
    let outputs = field(&tree, "nodes", "nodes")?;
    let scratch_output = first(outputs, "nodes[0]")?;
    let workspaces = field(scratch_output, "nodes", "nodes[0].nodes")?;
    let scratch_workspace = first(workspaces, "nodes[0].nodes[0]")?;
    let floating = field(
        scratch_workspace,
        "floating_nodes",
        "nodes[0].nodes[0].floating_nodes",
    )?;
    let windows = floating.as_array().ok_or(TreeError::Shape {
        path: "nodes[0].nodes[0].floating_nodes",
        reason: "expected a JSON array",
    })?;
    Ok(windows.len())
}
