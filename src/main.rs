//! spec-tree CLI - inspect Spec Trees
//!
//! Usage: spec-tree <COMMAND>
//!
//! Commands:
//!   status   Show the tree with per-node state and totals
//!   path     Show the path from the root to a node
//!   context  Show the context set of a node
//!   list     List every node in pre-order

use anyhow::{bail, Context, Result};
use clap::Parser;

use spec_tree::application::{ContextOptions, ContextResult, StatusOptions};
use spec_tree::config::{self, LoadedConfig};
use spec_tree::presentation::{factory, output, terminal, Cli, Commands, OutputStyle};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let loaded = config::load_or_default(Some(&cwd))?;
    report_config(&cli, &loaded);

    let style = OutputStyle::resolve(
        cli.color,
        &loaded.config.output,
        terminal::detect_capabilities(),
    );
    let tree_config = &loaded.config.tree;
    let tree_args = cli.command.tree_args();
    let rollup = tree_config.rollup && !tree_args.no_rollup;

    match &cli.command {
        Commands::Status { tree } => {
            let result = factory::create_status_use_case(tree, tree_config)
                .execute(&StatusOptions { rollup })?;
            report_source(cli.verbose, &result.source, result.node_count());

            if cli.json {
                print_json(&output::status_json(&result, rollup))?;
            } else {
                print_warnings(&result.warnings);
                print!("{}", output::render_status(&result, style));
            }
        }
        Commands::List { tree } => {
            let result = factory::create_status_use_case(tree, tree_config)
                .execute(&StatusOptions { rollup })?;
            report_source(cli.verbose, &result.source, result.node_count());

            if cli.json {
                print_json(&output::list_json(&result.tree, &result.warnings))?;
            } else {
                print_warnings(&result.warnings);
                print!("{}", output::render_list(&result.tree, style));
            }
        }
        Commands::Path { id, tree } => {
            let result = factory::create_context_use_case(tree, tree_config)
                .execute(id, &ContextOptions { rollup })?;
            report_source(cli.verbose, &result.source, result.path.len());

            // JSON still reports `found: false` before the error exit.
            if cli.json {
                print_json(&output::path_json(&result))?;
                ensure_found(&result)?;
            } else {
                ensure_found(&result)?;
                print!("{}", output::render_path(&result, style));
            }
        }
        Commands::Context { id, tree } => {
            let result = factory::create_context_use_case(tree, tree_config)
                .execute(id, &ContextOptions { rollup })?;
            report_source(cli.verbose, &result.source, result.len());

            if cli.json {
                print_json(&output::context_json(&result))?;
                ensure_found(&result)?;
            } else {
                ensure_found(&result)?;
                print!("{}", output::render_context(&result, style));
            }
        }
    }

    Ok(())
}

fn report_config(cli: &Cli, loaded: &LoadedConfig) {
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
    }
    if cli.verbose > 0 {
        match &loaded.path {
            Some(path) => eprintln!("Config: {}", path.display()),
            None => eprintln!("Config: built-in defaults"),
        }
    }
}

fn report_source(verbose: u8, source: &str, nodes: usize) {
    if verbose > 0 {
        eprintln!("Source: {}", source);
    }
    if verbose > 1 {
        eprintln!("Nodes: {}", nodes);
    }
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn ensure_found(result: &ContextResult) -> Result<()> {
    if result.found() {
        return Ok(());
    }
    match result.warnings.first() {
        Some(reason) => bail!("node not found: {} ({})", result.query, reason),
        None => bail!("node not found: {}", result.query),
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
