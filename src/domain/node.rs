//! Node store: the first-child / next-sibling node and its lifecycle.
//!
//! An arbitrary-arity ordered tree is encoded as a binary structure: each node
//! owns its first child and its next sibling. The children of a node are found
//! by following `first_child` once and then `next_sibling` repeatedly.
//!
//! Releasing a node releases everything it owns, which includes its *later
//! siblings*, not only its subtree. Only ever release a true root (or a handle
//! whose sibling chain you no longer need).

use std::fmt;

/// Optional owning relation to another node.
pub type Link = Option<Box<TreeNode>>;

/// Tree node carrying a text label and two owning relations.
#[derive(Debug, Default)]
pub struct TreeNode {
    label: Option<String>,
    first_child: Link,
    next_sibling: Link,
}

/// Allocates a detached node with an owned copy of `label`.
///
/// `None` produces a node with an absent label.
pub fn create_node(label: Option<&str>) -> TreeNode {
    TreeNode {
        label: label.map(str::to_owned),
        first_child: None,
        next_sibling: None,
    }
}

/// Releases `node`, its whole subtree and its whole sibling chain.
///
/// No-op for `None`. Since the node is consumed, a second release of the same
/// handle does not type-check.
pub fn release(node: Option<TreeNode>) {
    drop(node);
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            first_child: None,
            next_sibling: None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn first_child(&self) -> Option<&TreeNode> {
        self.first_child.as_deref()
    }

    pub fn next_sibling(&self) -> Option<&TreeNode> {
        self.next_sibling.as_deref()
    }

    /// A node without a first child is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    pub fn has_next_sibling(&self) -> bool {
        self.next_sibling.is_some()
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Siblings<'_> {
        Siblings {
            next: self.first_child(),
        }
    }

    /// This node followed by its later siblings.
    pub fn siblings(&self) -> Siblings<'_> {
        Siblings { next: Some(self) }
    }

    /// Sets the first child, releasing any chain previously held there.
    pub fn with_first_child(mut self, child: TreeNode) -> Self {
        self.first_child = Some(Box::new(child));
        self
    }

    /// Sets the next sibling, releasing any chain previously held there.
    pub fn with_next_sibling(mut self, sibling: TreeNode) -> Self {
        self.next_sibling = Some(Box::new(sibling));
        self
    }

    /// Appends `child` at the end of the child chain.
    pub fn push_child(&mut self, child: TreeNode) {
        let mut slot = &mut self.first_child;
        while let Some(node) = slot {
            slot = &mut node.next_sibling;
        }
        *slot = Some(Box::new(child));
    }

    pub(crate) fn link(&mut self, first_child: Link, next_sibling: Link) {
        self.first_child = first_child;
        self.next_sibling = next_sibling;
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or_default())
    }
}

// Teardown walks an explicit stack: the default recursive drop would overflow
// on long sibling chains.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = Vec::new();
        pending.extend(self.first_child.take());
        pending.extend(self.next_sibling.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.first_child.take());
            pending.extend(node.next_sibling.take());
        }
    }
}

/// Iterator over a sibling chain.
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    next: Option<&'a TreeNode>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling();
        Some(node)
    }
}
