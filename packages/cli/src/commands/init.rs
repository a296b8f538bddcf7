use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::store::FileStore;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use letterpress_editor::{save, Document};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// State file name
    #[arg(short, long, default_value = "letterpress.state.json")]
    pub state_file: String,

    /// Output directory for exports
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Force overwrite existing config and state
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Letterpress template...".bright_blue().bold()
    );

    let config = Config {
        state_file: args.state_file.clone(),
        out_dir: args.out_dir.clone(),
        ..Config::default()
    };

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let mut store = FileStore::new(config.get_state_path(cwd));
    if !store.path().exists() || args.force {
        save(&mut store, &Document::new())?;
        println!("  {} Created {}", "✓".green(), args.state_file);
    }

    println!();
    println!("{}", "✅ Template initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: letterpress add heading");
    println!("  2. Run: letterpress edit heading_0 text=\"Hello\"");
    println!("  3. Run: letterpress export");

    Ok(())
}
