use super::open_session;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use letterpress_editor::{BlockKind, FormValues};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the document as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// Block id; omit for the canvas settings form
    pub id: Option<String>,

    /// Print the values as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn list(args: ListArgs, cwd: &str) -> Result<()> {
    let (_, session) = open_session(cwd)?;
    let document = session.document();

    if args.json {
        let listing = serde_json::json!({
            "backgroundColor": document.background_color(),
            "blocks": document.blocks(),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!(
        "{} {} blocks, background {}",
        "📄".bright_blue(),
        document.len(),
        document.background_color().bright_white()
    );
    for (index, block) in document.blocks().iter().enumerate() {
        println!("  {:>2}. {} ({})", index, block.id.bright_white(), block.kind().label());
    }

    Ok(())
}

pub fn form(args: FormArgs, cwd: &str) -> Result<()> {
    let (_, session) = open_session(cwd)?;

    let values = match &args.id {
        Some(id) => session
            .form_values(id)
            .ok_or_else(|| anyhow!("Block not found: {}", id))?,
        None => session.canvas_form(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    let kind = args
        .id
        .as_deref()
        .and_then(|id| session.document().find(id))
        .map(|block| block.kind());
    print_form(&values, kind);
    Ok(())
}

fn print_form(values: &FormValues, kind: Option<BlockKind>) {
    let Some(kind) = kind else {
        for (name, value) in values {
            println!("  {} = {}", name.bright_white(), value);
        }
        return;
    };

    for descriptor in kind.describe_attributes() {
        let value = values.get(descriptor.name).map(String::as_str).unwrap_or("");
        println!(
            "  {} {} = {}",
            descriptor.label.dimmed(),
            descriptor.name.bright_white(),
            value.replace('\n', "\\n")
        );
        if let Some(palette) = descriptor.palette() {
            let options: Vec<&str> = palette.options.iter().map(|option| option.token).collect();
            println!("      {}", options.join(" | ").dimmed());
        }
    }

    if let Some(custom) = values.get(letterpress_editor::fields::CUSTOM_COLOR) {
        println!("  {} = {}", letterpress_editor::fields::CUSTOM_COLOR.bright_white(), custom);
    }
}
