//! Shell session: sole owner of the current tree.
//!
//! The session holds the root explicitly and releases it before a new tree is
//! built or loaded, on request, and when the session is dropped.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, ConsoleBuilder};
use crate::config::Settings;
use crate::domain::{
    count_leaves, count_nodes, count_non_leaves, degree, depth, find_by_label, max_degree, release,
    render_shape, traversal, Order, ShapeStyle, TreeBuilder, TreeNode,
};

/// Whole-tree statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub non_leaves: usize,
    pub max_degree: usize,
    pub depth: usize,
}

impl TreeStats {
    pub fn of(root: &TreeNode) -> Self {
        let root = Some(root);
        Self {
            nodes: count_nodes(root),
            leaves: count_leaves(root),
            non_leaves: count_non_leaves(root),
            max_degree: max_degree(root),
            depth: depth(root),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    root: Option<TreeNode>,
    style: ShapeStyle,
    sentinel: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            root: None,
            style: ShapeStyle::from(&settings.shape),
            sentinel: settings.console.sentinel.clone(),
        }
    }

    pub fn tree(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub fn has_tree(&self) -> bool {
        self.root.is_some()
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// The current root, or [`ApplicationError::NoTree`].
    pub fn require_tree(&self) -> ApplicationResult<&TreeNode> {
        self.root.as_ref().ok_or(ApplicationError::NoTree)
    }

    /// Releases the current tree (if any) and takes ownership of `root`.
    pub fn replace(&mut self, root: Option<TreeNode>) {
        self.release();
        self.root = root;
    }

    /// Releases the current tree; returns whether there was one.
    pub fn release(&mut self) -> bool {
        match self.root.take() {
            Some(root) => {
                debug!(nodes = count_nodes(Some(&root)), "releasing tree");
                release(Some(root));
                true
            }
            None => false,
        }
    }

    /// Releases the current tree, then loads a new one from `path`.
    ///
    /// On failure the session is left without a tree.
    #[instrument(level = "debug", skip(self))]
    pub fn load_file(&mut self, path: &Path) -> ApplicationResult<()> {
        self.release();
        let root = TreeBuilder::load_file(path)?;
        info!(nodes = count_nodes(Some(&root)), "tree loaded");
        self.root = Some(root);
        Ok(())
    }

    /// Releases the current tree, then builds a new one interactively.
    ///
    /// Returns whether a tree was built (the root prompt may be declined).
    pub fn build_from_console(&mut self, input: impl BufRead, output: impl Write) -> ApplicationResult<bool> {
        self.release();
        self.root = ConsoleBuilder::new(input, output)
            .with_sentinel(self.sentinel.clone())
            .build()?;
        Ok(self.has_tree())
    }

    pub fn stats(&self) -> ApplicationResult<TreeStats> {
        Ok(TreeStats::of(self.require_tree()?))
    }

    pub fn shape(&self) -> ApplicationResult<String> {
        Ok(render_shape(Some(self.require_tree()?), &self.style))
    }

    pub fn walk(&self, order: Order) -> ApplicationResult<Vec<String>> {
        Ok(traversal::labels(Some(self.require_tree()?), order))
    }

    /// Degree of the first node labelled `label`, `None` if no such node.
    pub fn node_degree(&self, label: &str) -> ApplicationResult<Option<usize>> {
        let root = self.require_tree()?;
        Ok(find_by_label(Some(root), label).map(|n| degree(Some(n))))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release();
    }
}
