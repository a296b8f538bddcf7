mod commands;
mod config;
mod store;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, background, edit, export, form, init, list, move_block, remove, reset, AddArgs,
    BackgroundArgs, EditArgs, ExportArgs, FormArgs, InitArgs, ListArgs, MoveArgs, RemoveArgs,
    ResetArgs,
};
use tracing_subscriber::EnvFilter;

/// Letterpress CLI - Block-based email template builder
#[derive(Parser, Debug)]
#[command(name = "letterpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new template in the current directory
    Init(InitArgs),

    /// Append a block
    Add(AddArgs),

    /// Apply property-form values to a block
    Edit(EditArgs),

    /// Delete a block
    Remove(RemoveArgs),

    /// Move a block to a new position
    Move(MoveArgs),

    /// Set the canvas background color
    Background(BackgroundArgs),

    /// Delete every block and restore the default background
    Reset(ResetArgs),

    /// List blocks in order
    List(ListArgs),

    /// Show the property form for a block, or the canvas settings
    Form(FormArgs),

    /// Compile the template to a standalone HTML email
    Export(ExportArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Add(args) => add(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Move(args) => move_block(args, &cwd),
        Command::Background(args) => background(args, &cwd),
        Command::Reset(args) => reset(args, &cwd),
        Command::List(args) => list(args, &cwd),
        Command::Form(args) => form(args, &cwd),
        Command::Export(args) => export(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
