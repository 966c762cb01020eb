//! Domain layer: the first-child / next-sibling tree and its algorithms
//!
//! This layer is independent of external concerns (no CLI, no config loading,
//! no terminal output).

pub mod builder;
pub mod error;
pub mod node;
pub mod queries;
pub mod render;
pub mod traversal;

pub use builder::{TreeBuilder, TreeResult};
pub use error::DomainError;
pub use node::{create_node, release, Link, Siblings, TreeNode};
pub use queries::{count_leaves, count_nodes, count_non_leaves, degree, depth, find_by_label, max_degree};
pub use render::{print_shape, render_shape, ShapeStyle};
pub use traversal::{level_order, postorder, preorder, LevelOrder, Order, Postorder, Preorder};
