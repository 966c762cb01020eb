//! Structural queries.
//!
//! Every query takes a possibly absent node and treats that node *together
//! with its sibling chain* as its scope, mirroring the child-chain plus
//! sibling-chain recursion of the node store. Called on a true root (which
//! has no siblings) the results are the usual whole-tree statistics.

use tracing::instrument;

use crate::domain::node::TreeNode;
use crate::domain::traversal::Preorder;

/// `1 + count(first_child) + count(next_sibling)`, 0 for an absent node.
pub fn count_nodes(node: Option<&TreeNode>) -> usize {
    Preorder::new(node).count()
}

/// Nodes without a first child.
pub fn count_leaves(node: Option<&TreeNode>) -> usize {
    Preorder::new(node).filter(|n| n.is_leaf()).count()
}

/// Nodes with at least one child.
pub fn count_non_leaves(node: Option<&TreeNode>) -> usize {
    Preorder::new(node).filter(|n| !n.is_leaf()).count()
}

/// Number of direct children of `node` (its own child chain only).
pub fn degree(node: Option<&TreeNode>) -> usize {
    node.map_or(0, |n| n.children().count())
}

/// Largest degree over the node, its descendants and its sibling chain.
#[instrument(level = "trace", skip_all)]
pub fn max_degree(node: Option<&TreeNode>) -> usize {
    Preorder::new(node)
        .map(|n| degree(Some(n)))
        .max()
        .unwrap_or(0)
}

/// `max(depth(first_child) + 1, depth(next_sibling))`, 0 for an absent node.
///
/// On a true root this is the height of the tree counted in levels (a lone
/// node has depth 1). On an interior handle the later siblings of that handle
/// are folded in as well: the result is the deepest level reached from any
/// node of the starting sibling chain.
#[instrument(level = "trace", skip_all)]
pub fn depth(node: Option<&TreeNode>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&TreeNode, usize)> = node.into_iter().map(|n| (n, 1)).collect();

    while let Some((current, level)) = stack.pop() {
        deepest = deepest.max(level);
        if let Some(sibling) = current.next_sibling() {
            stack.push((sibling, level));
        }
        if let Some(child) = current.first_child() {
            stack.push((child, level + 1));
        }
    }

    deepest
}

/// First node whose label equals `label`, in preorder.
///
/// Nodes with an absent label never match.
pub fn find_by_label<'a>(node: Option<&'a TreeNode>, label: &str) -> Option<&'a TreeNode> {
    Preorder::new(node).find(|n| n.label() == Some(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    // A
    // ├── B
    // │   └── D
    // └── C
    //     ├── E
    //     ├── F
    //     └── G
    #[fixture]
    fn tree() -> TreeNode {
        let mut b = TreeNode::new("B");
        b.push_child(TreeNode::new("D"));
        let mut c = TreeNode::new("C");
        for label in ["E", "F", "G"] {
            c.push_child(TreeNode::new(label));
        }
        let mut a = TreeNode::new("A");
        a.push_child(b);
        a.push_child(c);
        a
    }

    #[rstest]
    fn given_sample_tree_when_counting_then_partitions_leaves_and_internal(tree: TreeNode) {
        assert_eq!(count_nodes(Some(&tree)), 7);
        assert_eq!(count_leaves(Some(&tree)), 4);
        assert_eq!(count_non_leaves(Some(&tree)), 3);
    }

    #[rstest]
    fn given_sample_tree_when_querying_degrees_then_matches_child_counts(tree: TreeNode) {
        assert_eq!(degree(Some(&tree)), 2);
        assert_eq!(degree(find_by_label(Some(&tree), "C")), 3);
        assert_eq!(degree(find_by_label(Some(&tree), "G")), 0);
        assert_eq!(max_degree(Some(&tree)), 3);
    }

    #[rstest]
    fn given_sample_tree_when_measuring_depth_then_counts_levels(tree: TreeNode) {
        assert_eq!(depth(Some(&tree)), 3);
    }

    #[rstest]
    fn given_interior_handle_when_measuring_depth_then_folds_in_later_siblings(tree: TreeNode) {
        // E is a leaf, but its siblings F and G sit on the same level.
        let e = find_by_label(Some(&tree), "E");
        assert_eq!(depth(e), 1);

        // B alone has height 2; its sibling C also has height 2.
        let b = find_by_label(Some(&tree), "B");
        assert_eq!(depth(b), 2);
    }

    #[test]
    fn given_deeper_later_sibling_when_measuring_depth_then_sibling_depth_wins() {
        let mut late = TreeNode::new("late");
        late.push_child(TreeNode::new("x").with_first_child(TreeNode::new("y")));
        let early = TreeNode::new("early").with_next_sibling(late);

        assert_eq!(depth(Some(&early)), 3);
        assert_eq!(depth(early.first_child()), 0);
    }

    #[test]
    fn given_absent_tree_when_querying_then_returns_identity() {
        assert_eq!(count_nodes(None), 0);
        assert_eq!(count_leaves(None), 0);
        assert_eq!(count_non_leaves(None), 0);
        assert_eq!(degree(None), 0);
        assert_eq!(max_degree(None), 0);
        assert_eq!(depth(None), 0);
        assert!(find_by_label(None, "A").is_none());
    }

    #[test]
    fn given_single_node_when_querying_then_is_one_leaf_of_depth_one() {
        let node = TreeNode::new("solo");
        assert_eq!(count_nodes(Some(&node)), 1);
        assert_eq!(count_leaves(Some(&node)), 1);
        assert_eq!(count_non_leaves(Some(&node)), 0);
        assert_eq!(depth(Some(&node)), 1);
    }

    #[test]
    fn given_duplicate_labels_when_finding_then_returns_first_in_preorder() {
        // root -> [dup(child: dup), dup]
        let first = TreeNode::new("dup").with_first_child(TreeNode::new("dup"));
        let mut root = TreeNode::new("root");
        root.push_child(first);
        root.push_child(TreeNode::new("dup"));

        let found = find_by_label(Some(&root), "dup").map(|n| n as *const TreeNode);
        let expected = root.first_child().map(|n| n as *const TreeNode);
        assert_eq!(found, expected);
        assert!(find_by_label(Some(&root), "missing").is_none());
    }

    #[rstest]
    fn given_any_node_when_comparing_degrees_then_max_degree_dominates(tree: TreeNode) {
        let max = max_degree(Some(&tree));
        assert!(max >= degree(Some(&tree)));
        for child in tree.children() {
            assert!(max >= max_degree(Some(child)));
        }
    }
}
