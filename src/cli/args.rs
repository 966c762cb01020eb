//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::Order;

/// First-child / next-sibling tree shell: load, build, query, traverse and draw trees
#[derive(Parser, Debug)]
#[command(name = "sibtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (layered over the global config)
    #[arg(long, global = true, env = "SIBTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered menu (default)
    Menu,

    /// Build a tree from console prompts, then draw it
    Build,

    /// Node, leaf and non-leaf counts, max degree and depth
    Stats {
        /// Tree description file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Draw the tree
    Show {
        /// Tree description file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Drawing style
        #[arg(short, long, value_enum, default_value_t = ShowStyle::Ascii)]
        style: ShowStyle,
    },

    /// Print node labels in traversal order
    Traverse {
        /// Tree description file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Visit order
        #[arg(short, long, value_enum, default_value_t = TraverseOrder::Pre)]
        order: TraverseOrder,
    },

    /// Look up a node by label and report its degree
    Find {
        /// Tree description file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Node label
        label: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowStyle {
    /// Indented ASCII shape with configurable glyphs
    Ascii,
    /// Box-drawing tree
    Unicode,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraverseOrder {
    /// Node, then child subtree, then siblings
    Pre,
    /// Child subtree, then node, then siblings
    Post,
    /// Breadth first
    Level,
}

impl From<TraverseOrder> for Order {
    fn from(order: TraverseOrder) -> Self {
        match order {
            TraverseOrder::Pre => Order::Pre,
            TraverseOrder::Post => Order::Post,
            TraverseOrder::Level => Order::Level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_no_subcommand_when_parsing_then_command_is_none() {
        let cli = Cli::try_parse_from(["sibtree"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn given_traverse_with_order_when_parsing_then_maps_to_domain_order() {
        let cli = Cli::try_parse_from(["sibtree", "-dd", "traverse", "t.tree", "--order", "level"]).unwrap();
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Traverse { order, .. }) => assert_eq!(Order::from(order), Order::Level),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
