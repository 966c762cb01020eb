//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors describe why a tree description could not be turned into a tree.
///
/// Every variant is a terminal failure of the whole load: nodes created before
/// the failure have already been released when the error reaches the caller.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read tree description: {0}")]
    Read(#[from] std::io::Error),

    #[error("tree description is empty: missing node count")]
    MissingCount,

    #[error("line {line}: invalid node count: {content:?}")]
    InvalidCount { line: usize, content: String },

    #[error("line {line}: node count must be positive, got {count}")]
    NonPositiveCount { line: usize, count: i64 },

    #[error("line {line}: expected `label child sibling`, got {content:?}")]
    MalformedRow { line: usize, content: String },

    #[error("line {line}: index {index} out of range for {count} nodes")]
    IndexOutOfRange { line: usize, index: i64, count: usize },

    #[error("truncated description: expected {expected} node rows, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("node {index} is referenced more than once")]
    SharedNode { index: usize },

    #[error("node {index} is not reachable from node 0")]
    UnreachableNode { index: usize },
}
