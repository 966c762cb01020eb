//! Shape renderer: indented ASCII art of a tree.
//!
//! One depth-first pass keeps a growable per-depth continuation array:
//! `continuation[d]` is true when the ancestor at depth `d` still has a later
//! sibling, so rows below it draw a vertical mark in that column.

use std::io::{self, Write};

use crate::domain::node::TreeNode;

/// Glyphs used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeStyle {
    /// Column under an ancestor that has a later sibling
    pub continuation: String,
    /// Column under an ancestor that was the last of its siblings
    pub padding: String,
    /// Branch to a node that has a following sibling
    pub branch: String,
    /// Branch to the last node of a sibling chain
    pub last_branch: String,
    /// Text drawn for an absent label
    pub placeholder: String,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            continuation: "|  ".into(),
            padding: "   ".into(),
            branch: "/ ".into(),
            last_branch: "`` ".into(),
            placeholder: "(null)".into(),
        }
    }
}

/// Renders `node` and its sibling chain, one line per node, in preorder.
///
/// Nodes of the starting sibling chain are drawn at depth 0 without a
/// branch glyph. Returns an empty string for an absent node.
pub fn render_shape(node: Option<&TreeNode>, style: &ShapeStyle) -> String {
    let mut out = String::new();
    let mut continuation: Vec<bool> = Vec::new();
    let mut stack: Vec<(&TreeNode, usize)> = node.into_iter().map(|n| (n, 0)).collect();

    while let Some((current, depth)) = stack.pop() {
        if depth > 0 {
            for &open in &continuation[..depth] {
                out.push_str(if open {
                    &style.continuation
                } else {
                    &style.padding
                });
            }
            out.push_str(if current.has_next_sibling() {
                &style.branch
            } else {
                &style.last_branch
            });
        }
        out.push_str(current.label().unwrap_or(&style.placeholder));
        out.push('\n');

        if continuation.len() <= depth {
            continuation.resize(depth + 1, false);
        }
        continuation[depth] = current.has_next_sibling();

        // the sibling waits below the child so the whole subtree is drawn first
        if let Some(sibling) = current.next_sibling() {
            stack.push((sibling, depth));
        }
        if let Some(child) = current.first_child() {
            stack.push((child, depth + 1));
        }
    }

    out
}

/// Writes [`render_shape`] output to `out`.
pub fn print_shape(node: Option<&TreeNode>, style: &ShapeStyle, out: &mut impl Write) -> io::Result<()> {
    out.write_all(render_shape(node, style).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::create_node;

    fn sample() -> TreeNode {
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

    #[test]
    fn given_sample_tree_when_rendering_then_draws_branches_and_continuations() {
        let tree = sample();
        let expected = "\
A
   / B
   |  `` D
   `` C
      / E
      / F
      `` G
";
        assert_eq!(render_shape(Some(&tree), &ShapeStyle::default()), expected);
    }

    #[test]
    fn given_top_level_sibling_chain_when_rendering_then_each_root_has_no_glyph() {
        let first = TreeNode::new("r1").with_first_child(TreeNode::new("x"));
        let chain = first.with_next_sibling(TreeNode::new("r2"));

        let expected = "\
r1
|  `` x
r2
";
        assert_eq!(render_shape(Some(&chain), &ShapeStyle::default()), expected);
    }

    #[test]
    fn given_absent_label_when_rendering_then_draws_placeholder() {
        let mut root = TreeNode::new("root");
        root.push_child(create_node(None));

        let style = ShapeStyle {
            placeholder: "<?>".into(),
            ..ShapeStyle::default()
        };
        assert_eq!(render_shape(Some(&root), &style), "root\n   `` <?>\n");
    }

    #[test]
    fn given_absent_tree_when_rendering_then_output_is_empty() {
        assert_eq!(render_shape(None, &ShapeStyle::default()), "");
    }

    #[test]
    fn given_writer_when_printing_then_writes_rendered_lines() {
        let tree = sample();
        let mut buf: Vec<u8> = Vec::new();
        print_shape(Some(&tree), &ShapeStyle::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("A\n"));
    }
}
