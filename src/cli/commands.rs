//! Command dispatch for the non-interactive subcommands and the menu.

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt, Session, TreeStats};
use crate::cli::args::{Cli, Commands, ConfigCommands, ShowStyle, TraverseOrder};
use crate::cli::menu::Menu;
use crate::cli::{output, CliError, CliResult};
use crate::config::{global_config_dir, global_config_path, Settings};
use crate::domain::{max_degree, Order};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // completions need no settings
    if let Some(Commands::Completion { shell }) = &cli.command {
        return cmd_completion(*shell);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "effective settings");

    match &cli.command {
        None | Some(Commands::Menu) => cmd_menu(&settings),
        Some(Commands::Build) => cmd_build(&settings),
        Some(Commands::Stats { file }) => cmd_stats(&settings, file),
        Some(Commands::Show { file, style }) => cmd_show(&settings, file, *style),
        Some(Commands::Traverse { file, order }) => cmd_traverse(&settings, file, *order),
        Some(Commands::Find { file, label }) => cmd_find(&settings, file, label),
        Some(Commands::Config { command }) => cmd_config(cli, command, &settings),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

fn load(settings: &Settings, file: &Path) -> CliResult<Session> {
    let mut session = Session::new(settings);
    session.load_file(file)?;
    Ok(session)
}

fn cmd_menu(settings: &Settings) -> CliResult<()> {
    let stdin = io::stdin();
    Menu::new(Session::new(settings), stdin.lock(), io::stdout()).run()
}

#[instrument(level = "debug", skip(settings))]
fn cmd_build(settings: &Settings) -> CliResult<()> {
    let mut session = Session::new(settings);
    let stdin = io::stdin();
    let built = session.build_from_console(stdin.lock(), io::stdout())?;
    println!();
    if !built {
        output::warning("no tree built");
        return Ok(());
    }

    output::success("tree built");
    output::info(&session.shape()?.trim_end());
    print_stats(&session.stats()?);
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_stats(settings: &Settings, file: &Path) -> CliResult<()> {
    let session = load(settings, file)?;
    print_stats(&session.stats()?);
    Ok(())
}

fn print_stats(stats: &TreeStats) {
    output::header("Tree statistics");
    output::field("nodes", &stats.nodes);
    output::field("leaves", &stats.leaves);
    output::field("non-leaves", &stats.non_leaves);
    output::field("max degree", &stats.max_degree);
    output::field("depth", &stats.depth);
}

#[instrument(level = "debug", skip(settings))]
fn cmd_show(settings: &Settings, file: &Path, style: ShowStyle) -> CliResult<()> {
    let session = load(settings, file)?;
    match style {
        ShowStyle::Ascii => {
            let mut stdout = io::stdout().lock();
            crate::domain::print_shape(session.tree(), session.style(), &mut stdout)
                .with_context("write shape")?;
        }
        ShowStyle::Unicode => {
            let root = session.require_tree()?;
            for tree in root.to_forest(&settings.shape.placeholder) {
                print!("{tree}");
            }
            io::stdout().flush().with_context("flush stdout")?;
        }
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_traverse(settings: &Settings, file: &Path, order: TraverseOrder) -> CliResult<()> {
    let session = load(settings, file)?;
    let labels = session.walk(Order::from(order))?;
    output::info(&labels.join(" "));
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_find(settings: &Settings, file: &Path, label: &str) -> CliResult<()> {
    let session = load(settings, file)?;
    match session.node_degree(label)? {
        Some(degree) => output::field(&format!("degree of [{label}]"), &degree),
        None => output::warning(&format!("no node labelled [{label}]")),
    }
    output::field("max degree", &max_degree(session.tree()));
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?.trim_end());
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "exists" } else { "not found" };
                    output::field("global", &format!("{} ({state})", path.display()));
                }
                None => output::field("global", "unavailable (no home directory)"),
            }
            if let Some(explicit) = &cli.config {
                output::field("explicit", &explicit.display());
            }
            Ok(())
        }
        ConfigCommands::Init { force } => cmd_config_init(*force),
    }
}

fn cmd_config_init(force: bool) -> CliResult<()> {
    let (Some(dir), Some(path)) = (global_config_dir(), global_config_path()) else {
        return Err(ApplicationError::Config {
            message: "cannot determine config directory".into(),
        }
        .into());
    };
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    std::fs::create_dir_all(&dir).with_path_context("create config dir", &dir)?;
    std::fs::write(&path, Settings::template()).with_path_context("write config", &path)?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

fn cmd_completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
