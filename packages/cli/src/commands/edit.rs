use super::{open_session, report};
use anyhow::{anyhow, Result};
use clap::Args;
use letterpress_editor::{FormValues, Mutation};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Block type (heading, text, image, button, table, divider, spacer, list)
    pub block_type: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Block id (e.g. heading_0)
    pub id: String,

    /// Form values as key=value; `\n` in a value starts a new line
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Block id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Block id
    pub id: String,

    /// Target position, clamped to the last slot
    pub index: usize,
}

#[derive(Debug, Args)]
pub struct BackgroundArgs {
    /// Palette color or any CSS color
    pub color: String,
}

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip the confirmation guard
    #[arg(short, long)]
    pub yes: bool,
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let (_, mut session) = open_session(cwd)?;
    let outcome = session.dispatch(Mutation::add(&args.block_type)?)?;
    report(&outcome, "Added");
    Ok(())
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let values = parse_values(&args.values)?;
    let (_, mut session) = open_session(cwd)?;
    let outcome = session.dispatch(Mutation::Edit {
        block_id: args.id,
        values,
    })?;
    report(&outcome, "Updated");
    Ok(())
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let (_, mut session) = open_session(cwd)?;
    let outcome = session.dispatch(Mutation::Delete { block_id: args.id })?;
    report(&outcome, "Removed");
    Ok(())
}

pub fn move_block(args: MoveArgs, cwd: &str) -> Result<()> {
    let (_, mut session) = open_session(cwd)?;
    let outcome = session.dispatch(Mutation::Move {
        block_id: args.id,
        index: args.index,
    })?;
    report(&outcome, "Moved");
    Ok(())
}

pub fn background(args: BackgroundArgs, cwd: &str) -> Result<()> {
    let (_, mut session) = open_session(cwd)?;
    let outcome = session.dispatch(Mutation::SetCanvasBackground { value: args.color })?;
    report(&outcome, "Background set");
    Ok(())
}

pub fn reset(args: ResetArgs, cwd: &str) -> Result<()> {
    if !args.yes {
        return Err(anyhow!(
            "Reset deletes all blocks. Run again with --yes to confirm"
        ));
    }

    let (_, mut session) = open_session(cwd)?;
    let outcome = session.dispatch(Mutation::ResetAll)?;
    report(&outcome, "Canvas reset");
    Ok(())
}

/// Parse `key=value` pairs into form values
pub fn parse_values(pairs: &[String]) -> Result<FormValues> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected key=value, got {:?}", pair))?;
            Ok((key.trim().to_string(), value.replace("\\n", "\n")))
        })
        .collect()
}
