//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use sibtree::domain::{Preorder, TreeNode};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/trees")
        .join(name)
}

/// Writes `root` in the row format, numbering nodes in preorder.
///
/// Absent labels are written as `_`.
pub fn serialize(root: &TreeNode) -> String {
    let nodes: Vec<&TreeNode> = Preorder::new(Some(root)).collect();
    let index_of = |target: Option<&TreeNode>| -> i64 {
        target
            .and_then(|t| nodes.iter().position(|n| std::ptr::eq(*n, t)))
            .map_or(-1, |i| i as i64)
    };

    let mut out = format!("{}\n", nodes.len());
    for node in &nodes {
        out.push_str(&format!(
            "{} {} {}\n",
            node.label().unwrap_or("_"),
            index_of(node.first_child()),
            index_of(node.next_sibling()),
        ));
    }
    out
}

/// Degrees of all nodes in preorder.
pub fn degree_sequence(root: &TreeNode) -> Vec<usize> {
    Preorder::new(Some(root))
        .map(|n| sibtree::domain::degree(Some(n)))
        .collect()
}
