//! Interactive numbered menu over a [`Session`].
//!
//! Generic over its input and output so the whole loop can be driven from
//! byte buffers in tests.

use std::io::{BufRead, Write};

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, IoResultExt, Session};
use crate::cli::{CliError, CliResult};
use crate::domain::{count_leaves, count_nodes, count_non_leaves, depth, max_degree, Order};
use crate::util::path::expand_path;

const MENU: &str = "
======== sibtree ========
0. Exit
1. Build tree from console
2. Load tree from file
3. Node count
4. Leaf count
5. Non-leaf count
6. Node degree / max degree
7. Depth
8. Show shape
9. Level-order traversal
10. Preorder traversal
11. Postorder traversal
12. Release current tree
Choice: ";

const NO_TREE: &str = "No tree: build or load one first.";

/// One menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Exit,
    Build,
    Load,
    Nodes,
    Leaves,
    NonLeaves,
    Degree,
    Depth,
    Shape,
    Walk(Order),
    Release,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u8>().ok()? {
            0 => Choice::Exit,
            1 => Choice::Build,
            2 => Choice::Load,
            3 => Choice::Nodes,
            4 => Choice::Leaves,
            5 => Choice::NonLeaves,
            6 => Choice::Degree,
            7 => Choice::Depth,
            8 => Choice::Shape,
            9 => Choice::Walk(Order::Level),
            10 => Choice::Walk(Order::Pre),
            11 => Choice::Walk(Order::Post),
            12 => Choice::Release,
            _ => return None,
        };
        Some(choice)
    }
}

pub struct Menu<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until "0" or end of input; the tree is released on exit.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.write(MENU)?;
            let Some(line) = self.read_line()? else {
                debug!("end of input");
                break;
            };
            let Some(choice) = Choice::parse(&line) else {
                self.write("Invalid choice, try again.\n")?;
                continue;
            };
            debug!(?choice, "menu choice");
            if choice == Choice::Exit {
                break;
            }
            self.dispatch(choice)?;
        }

        self.session.release();
        self.write("Bye.\n")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> CliResult<()> {
        let result = match choice {
            Choice::Exit => Ok(()),
            Choice::Build => self.build(),
            Choice::Load => self.load(),
            Choice::Release => {
                let message = if self.session.release() {
                    "Tree released.\n"
                } else {
                    "No tree to release.\n"
                };
                self.write(message)
            }
            query => self.query(query),
        };

        // a missing tree is a normal menu outcome, everything else propagates
        match result {
            Err(CliError::Application(ApplicationError::NoTree)) => self.write(&format!("{NO_TREE}\n")),
            other => other,
        }
    }

    fn build(&mut self) -> CliResult<()> {
        let built = self
            .session
            .build_from_console(&mut self.input, &mut self.output)?;
        self.write(if built { "\nTree built.\n" } else { "\nNo tree built.\n" })
    }

    fn load(&mut self) -> CliResult<()> {
        self.write("File name (with path): ")?;
        let line = self.read_line()?.unwrap_or_default();
        let name = line.trim();
        if name.is_empty() {
            return self.write("Invalid file name.\n");
        }

        match self.session.load_file(&expand_path(name)) {
            Ok(()) => self.write("Tree loaded.\n"),
            Err(ApplicationError::Domain(e)) => {
                warn!(error = %e, "load failed");
                self.write(&format!("Load failed: {e}\n"))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn query(&mut self, choice: Choice) -> CliResult<()> {
        let root = self.session.require_tree()?;
        let text = match choice {
            Choice::Nodes => format!("Node count: {}\n", count_nodes(Some(root))),
            Choice::Leaves => format!("Leaf count: {}\n", count_leaves(Some(root))),
            Choice::NonLeaves => format!("Non-leaf count: {}\n", count_non_leaves(Some(root))),
            Choice::Depth => format!("Depth: {}\n", depth(Some(root))),
            Choice::Shape => self.session.shape()?,
            Choice::Walk(order) => {
                let title = match order {
                    Order::Pre => "Preorder",
                    Order::Post => "Postorder",
                    Order::Level => "Level order",
                };
                format!("{title}: {}\n", self.session.walk(order)?.join(" "))
            }
            Choice::Degree => {
                let max = max_degree(Some(root));
                self.write("Node label (empty for max degree only): ")?;
                let line = self.read_line()?.unwrap_or_default();
                let label = line.trim();
                let mut text = String::new();
                if !label.is_empty() {
                    match self.session.node_degree(label)? {
                        Some(degree) => text.push_str(&format!("Degree of [{label}]: {degree}\n")),
                        None => text.push_str(&format!("No node labelled [{label}].\n")),
                    }
                }
                text.push_str(&format!("Max degree: {max}\n"));
                text
            }
            Choice::Exit | Choice::Build | Choice::Load | Choice::Release => String::new(),
        };
        self.write(&text)
    }

    fn write(&mut self, text: &str) -> CliResult<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .with_context("write menu output")?;
        Ok(())
    }

    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).with_context("read menu input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
