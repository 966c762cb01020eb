//! Tree builder: turns indexed node rows into a linked tree.
//!
//! The text format read by [`TreeBuilder::load_reader`] is
//!
//! ```text
//! N
//! label_0 child_0 sibling_0
//! ...
//! label_{N-1} child_{N-1} sibling_{N-1}
//! ```
//!
//! where every index is `-1` (absent) or a 0-based row number below `N`.
//! Row 0 is the root. Loading is all-or-nothing: on any failure every node
//! created so far is released before the error is returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::domain::error::DomainError;
use crate::domain::node::{create_node, TreeNode};
use crate::util::path::ensure_file_exists;

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

/// Index value standing for "no node".
const ABSENT: i64 = -1;

#[derive(Debug)]
struct Row {
    node: TreeNode,
    child: Option<usize>,
    sibling: Option<usize>,
    /// Source line, 0 when the row was not read from text
    line: usize,
}

/// Collects detached nodes with index links and assembles them into a tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    rows: Vec<Row>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Adds a node without links and returns its index.
    pub fn push_node(&mut self, node: TreeNode) -> usize {
        self.push_row(node, None, None, 0)
    }

    fn push_row(&mut self, node: TreeNode, child: Option<usize>, sibling: Option<usize>, line: usize) -> usize {
        self.rows.push(Row {
            node,
            child,
            sibling,
            line,
        });
        self.rows.len() - 1
    }

    /// Links `child` as the first child of `parent`. Unknown indices are ignored.
    pub fn set_first_child(&mut self, parent: usize, child: usize) {
        if let Some(row) = self.rows.get_mut(parent) {
            row.child = Some(child);
        }
    }

    /// Links `sibling` as the next sibling of `node`. Unknown indices are ignored.
    pub fn set_next_sibling(&mut self, node: usize, sibling: usize) {
        if let Some(row) = self.rows.get_mut(node) {
            row.sibling = Some(sibling);
        }
    }

    /// Links all rows and returns row 0 as the root, `None` when no rows exist.
    ///
    /// The index links must form a tree rooted at row 0: every other row is
    /// referenced exactly once, row 0 is never referenced. Shared, cyclic or
    /// detached rows cannot be expressed by owning relations and are rejected.
    #[instrument(level = "debug", skip(self), fields(rows = self.rows.len()))]
    pub fn build(self) -> TreeResult<Option<TreeNode>> {
        let count = self.rows.len();
        if count == 0 {
            return Ok(None);
        }

        let mut referenced = vec![false; count];
        for row in &self.rows {
            for target in [row.child, row.sibling].into_iter().flatten() {
                if target >= count {
                    return Err(DomainError::IndexOutOfRange {
                        line: row.line,
                        index: i64::try_from(target).unwrap_or(i64::MAX),
                        count,
                    });
                }
                if target == 0 || referenced[target] {
                    return Err(DomainError::SharedNode { index: target });
                }
                referenced[target] = true;
            }
        }

        // With at most one reference per row and none to the root, the walk
        // from row 0 cannot revisit a row.
        let mut order = Vec::with_capacity(count);
        let mut seen = vec![false; count];
        let mut stack = vec![0];
        while let Some(idx) = stack.pop() {
            seen[idx] = true;
            order.push(idx);
            let row = &self.rows[idx];
            stack.extend(row.sibling);
            stack.extend(row.child);
        }
        if let Some(index) = seen.iter().position(|&s| !s) {
            return Err(DomainError::UnreachableNode { index });
        }

        let (mut built, links): (Vec<Option<TreeNode>>, Vec<(Option<usize>, Option<usize>)>) = self
            .rows
            .into_iter()
            .map(|row| (Some(row.node), (row.child, row.sibling)))
            .unzip();

        // Reverse preorder: children and siblings are complete before their owner.
        for &idx in order.iter().rev() {
            let (child, sibling) = links[idx];
            let first_child = child.and_then(|c| built[c].take()).map(Box::new);
            let next_sibling = sibling.and_then(|s| built[s].take()).map(Box::new);
            if let Some(node) = built[idx].as_mut() {
                node.link(first_child, next_sibling);
            }
        }

        debug!(count, "linked tree");
        Ok(built[0].take())
    }

    /// Loads a tree description file.
    #[instrument(level = "debug")]
    pub fn load_file(path: &Path) -> TreeResult<TreeNode> {
        ensure_file_exists(path)?;
        let file = File::open(path)?;
        Self::load_reader(BufReader::new(file))
    }

    /// Loads a tree description held in memory.
    pub fn parse_str(text: &str) -> TreeResult<TreeNode> {
        Self::load_reader(text.as_bytes())
    }

    /// Loads a tree description from any buffered reader.
    ///
    /// Blank lines are skipped; lines after the `N`th node row are ignored.
    #[instrument(level = "debug", skip_all)]
    pub fn load_reader(reader: impl BufRead) -> TreeResult<TreeNode> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(i, line)| line.map(|text| (i + 1, text)))
            .filter(|entry| entry.as_ref().map_or(true, |(_, text)| !text.trim().is_empty()));

        let (line, text) = lines.next().ok_or(DomainError::MissingCount)??;
        let count = parse_count(line, &text)?;
        debug!(count, "reading node rows");

        // nodes created so far are released with the builder on early return
        let mut builder = TreeBuilder::new();
        builder.rows.reserve(count.min(4096));
        while builder.len() < count {
            let Some(entry) = lines.next() else {
                return Err(DomainError::Truncated {
                    expected: count,
                    found: builder.len(),
                });
            };
            let (line, text) = entry?;
            let (label, child, sibling) = parse_row(line, &text, count)?;
            trace!(line, label, ?child, ?sibling, "row");
            builder.push_row(create_node(Some(label)), child, sibling, line);
        }

        builder.build()?.ok_or(DomainError::MissingCount)
    }
}

fn parse_count(line: usize, text: &str) -> TreeResult<usize> {
    let value: i64 = text.trim().parse().map_err(|_| DomainError::InvalidCount {
        line,
        content: text.to_string(),
    })?;
    if value <= 0 {
        return Err(DomainError::NonPositiveCount { line, count: value });
    }
    usize::try_from(value).map_err(|_| DomainError::InvalidCount {
        line,
        content: text.to_string(),
    })
}

fn parse_row(line: usize, text: &str, count: usize) -> TreeResult<(&str, Option<usize>, Option<usize>)> {
    let malformed = || DomainError::MalformedRow {
        line,
        content: text.to_string(),
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[label, child, sibling] = tokens.as_slice() else {
        return Err(malformed());
    };
    let child: i64 = child.parse().map_err(|_| malformed())?;
    let sibling: i64 = sibling.parse().map_err(|_| malformed())?;

    Ok((
        label,
        resolve_index(line, child, count)?,
        resolve_index(line, sibling, count)?,
    ))
}

fn resolve_index(line: usize, index: i64, count: usize) -> TreeResult<Option<usize>> {
    if index == ABSENT {
        return Ok(None);
    }
    match usize::try_from(index) {
        Ok(idx) if idx < count => Ok(Some(idx)),
        _ => Err(DomainError::IndexOutOfRange { line, index, count }),
    }
}
