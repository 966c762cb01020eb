//! Traversal engine.
//!
//! All orders walk the "child chain + sibling chain" recursion starting at a
//! node, so the starting node's later siblings are part of the walk. Each
//! order is available as a lazy iterator and as a visitor function.
//! Iterators keep their pending work on the heap, never on the call stack.

use std::collections::VecDeque;

use crate::domain::node::TreeNode;

/// Visit a node, then its first child chain, then its next sibling chain.
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Preorder<'a> {
    pub fn new(start: Option<&'a TreeNode>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // sibling below child: the child subtree is drained first
        self.stack.extend(node.next_sibling());
        self.stack.extend(node.first_child());
        Some(node)
    }
}

/// Walk the first child chain, visit the node, then walk the next sibling chain.
///
/// In the binary encoding this is an in-order walk with `first_child` as the
/// left and `next_sibling` as the right branch, which yields every node after
/// all of its descendants.
#[derive(Debug, Clone)]
pub struct Postorder<'a> {
    stack: Vec<&'a TreeNode>,
    cursor: Option<&'a TreeNode>,
}

impl<'a> Postorder<'a> {
    pub fn new(start: Option<&'a TreeNode>) -> Self {
        Self {
            stack: Vec::new(),
            cursor: start,
        }
    }
}

impl<'a> Iterator for Postorder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.first_child();
        }
        let node = self.stack.pop()?;
        self.cursor = node.next_sibling();
        Some(node)
    }
}

/// Breadth-first walk.
///
/// The frontier is seeded with the starting node and its whole sibling chain;
/// each visited node appends its children to the back.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> LevelOrder<'a> {
    pub fn new(start: Option<&'a TreeNode>) -> Self {
        Self {
            queue: start.into_iter().flat_map(TreeNode::siblings).collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

pub fn preorder<'a>(node: Option<&'a TreeNode>, visit: impl FnMut(&'a TreeNode)) {
    Preorder::new(node).for_each(visit);
}

pub fn postorder<'a>(node: Option<&'a TreeNode>, visit: impl FnMut(&'a TreeNode)) {
    Postorder::new(node).for_each(visit);
}

pub fn level_order<'a>(node: Option<&'a TreeNode>, visit: impl FnMut(&'a TreeNode)) {
    LevelOrder::new(node).for_each(visit);
}

/// Traversal order selector used by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Pre,
    Post,
    Level,
}

/// Collects the labels of a walk in the given order.
///
/// Absent labels are skipped.
pub fn labels(node: Option<&TreeNode>, order: Order) -> Vec<String> {
    let mut out = Vec::new();
    let mut visit = |n: &TreeNode| {
        if let Some(label) = n.label() {
            out.push(label.to_string());
        }
    };
    match order {
        Order::Pre => preorder(node, &mut visit),
        Order::Post => postorder(node, &mut visit),
        Order::Level => level_order(node, &mut visit),
    }
    out
}
