//! Ordered trees stored in first-child / next-sibling form.
//!
//! The [`domain`] layer holds the tree, its loaders, queries, traversals and
//! the shape renderer; [`application`] owns the current tree for the shell;
//! [`cli`] is the command-line and menu front end.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{DomainError, TreeBuilder, TreeNode};
