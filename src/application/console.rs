//! Interactive tree construction.
//!
//! Prompts depth-first: for every created node the whole first-child subtree
//! is asked for before the next sibling. A line equal to the sentinel, an
//! empty line or end of input means "no node here".

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{create_node, TreeBuilder, TreeNode};

/// Line marking an absent node.
pub const DEFAULT_SENTINEL: &str = "#";

#[derive(Debug, Clone, Copy)]
enum Slot {
    Root,
    FirstChild(usize),
    NextSibling(usize),
}

/// Builds one tree from line-oriented input, writing prompts to `output`.
pub struct ConsoleBuilder<R, W> {
    input: R,
    output: W,
    sentinel: String,
}

impl<R: BufRead, W: Write> ConsoleBuilder<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Runs the prompt sequence; `Ok(None)` when the root itself was declined.
    #[instrument(level = "debug", skip(self), fields(sentinel = %self.sentinel))]
    pub fn build(&mut self) -> ApplicationResult<Option<TreeNode>> {
        let mut builder = TreeBuilder::new();
        let mut labels: Vec<String> = Vec::new();
        let mut pending = vec![Slot::Root];

        while let Some(slot) = pending.pop() {
            let prompt = match slot {
                Slot::Root => format!("Enter node label ({} for none): ", self.sentinel),
                Slot::FirstChild(parent) => format!("First child of [{}]: ", labels[parent]),
                Slot::NextSibling(node) => format!("Next sibling of [{}]: ", labels[node]),
            };
            let Some(label) = self.ask(&prompt)? else {
                continue;
            };

            let idx = builder.push_node(create_node(Some(&label)));
            match slot {
                Slot::Root => {}
                Slot::FirstChild(parent) => builder.set_first_child(parent, idx),
                Slot::NextSibling(node) => builder.set_next_sibling(node, idx),
            }
            labels.push(label);

            // LIFO: the child subtree is asked for before the sibling
            pending.push(Slot::NextSibling(idx));
            pending.push(Slot::FirstChild(idx));
        }

        debug!(nodes = builder.len(), "console input complete");
        Ok(builder.build()?)
    }

    fn ask(&mut self, prompt: &str) -> ApplicationResult<Option<String>> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|_| self.output.flush())
            .with_context("write prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).with_context("read node label")?;
        if read == 0 {
            return Ok(None);
        }

        let label = line.trim_end_matches(['\n', '\r']);
        if label == self.sentinel || label.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(label.to_string()))
    }
}
