use super::open_session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use letterpress_compiler_html::compile_to_html;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_EXPORT_NAME: &str = "email.html";

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output file (overrides config outDir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact HTML
    #[arg(long)]
    pub compact: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let (config, session) = open_session(cwd)?;

    let mut options = config.compile_options();
    if args.compact {
        options.pretty = false;
    }

    let html = compile_to_html(session.document(), &options);

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    let output_path = match args.output {
        Some(path) if path.is_absolute() => path,
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_out_dir(cwd).join(DEFAULT_EXPORT_NAME),
    };

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, &html)?;

    println!(
        "{} Exported {} blocks → {}",
        "✅".green(),
        session.document().len(),
        output_path.display()
    );

    Ok(())
}
