/*
Conversion of first-child / next-sibling trees into `termtree::Tree` values,
used for the unicode box-drawing view next to the ASCII shape renderer.

Conversion is iterative: nodes are collected in preorder with their level,
then assembled in reverse, so the finished child trees of a node sit on top of
a work stack when the node is reached. `termtree::Tree` drops recursively, so
subtrees below `UNICODE_MAX_DEPTH` levels are cut and marked.
 */
use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::TreeNode;

/// Deepest level drawn with box characters.
pub const UNICODE_MAX_DEPTH: usize = 256;

/// Leaf standing in for subtrees cut at [`UNICODE_MAX_DEPTH`].
pub const TRUNCATED_MARKER: &str = "...";

pub trait TreeNodeConvert {
    /// Tree rooted at this node; absent labels become `placeholder`.
    fn to_tree_string(&self, placeholder: &str) -> Tree<String>;

    /// One tree per node of the sibling chain starting here.
    fn to_forest(&self, placeholder: &str) -> Vec<Tree<String>>;
}

impl TreeNodeConvert for TreeNode {
    fn to_tree_string(&self, placeholder: &str) -> Tree<String> {
        let children = build_forest(self.first_child(), 2, placeholder);
        Tree::new(self.label().unwrap_or(placeholder).to_string()).with_leaves(children)
    }

    #[instrument(level = "trace", skip(self))]
    fn to_forest(&self, placeholder: &str) -> Vec<Tree<String>> {
        build_forest(Some(self), 1, placeholder)
    }
}

/// Trees for `start` and its sibling chain, in chain order.
fn build_forest(start: Option<&TreeNode>, level: usize, placeholder: &str) -> Vec<Tree<String>> {
    let mut order: Vec<(&TreeNode, usize)> = Vec::new();
    let mut stack: Vec<(&TreeNode, usize)> = start.into_iter().map(|n| (n, level)).collect();
    while let Some((node, level)) = stack.pop() {
        order.push((node, level));
        stack.extend(node.next_sibling().map(|s| (s, level)));
        if level < UNICODE_MAX_DEPTH {
            stack.extend(node.first_child().map(|c| (c, level + 1)));
        }
    }

    // reverse preorder: a node's child trees are on top, first child topmost
    let mut finished: Vec<Tree<String>> = Vec::new();
    let mut cut = 0usize;
    for (node, level) in order.into_iter().rev() {
        let mut tree = Tree::new(node.label().unwrap_or(placeholder).to_string());
        if level < UNICODE_MAX_DEPTH {
            for _ in node.children() {
                if let Some(child) = finished.pop() {
                    tree.push(child);
                }
            }
        } else if !node.is_leaf() {
            cut += 1;
            tree.push(TRUNCATED_MARKER.to_string());
        }
        finished.push(tree);
    }
    if cut > 0 {
        debug!(cut, max_depth = UNICODE_MAX_DEPTH, "subtrees cut in unicode view");
    }

    finished.reverse();
    finished
}
