pub mod edit;
pub mod export;
pub mod init;
pub mod inspect;

pub use edit::{add, background, edit, move_block, remove, reset, AddArgs, BackgroundArgs, EditArgs, MoveArgs, RemoveArgs, ResetArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use inspect::{form, list, FormArgs, ListArgs};

use crate::config::Config;
use crate::store::FileStore;
use colored::Colorize;
use letterpress_editor::{DispatchOutcome, EditSession};

/// Open the session backed by the configured state file
pub(crate) fn open_session(cwd: &str) -> anyhow::Result<(Config, EditSession<FileStore>)> {
    let config = Config::load(cwd)?;
    let store = FileStore::new(config.get_state_path(cwd));
    Ok((config, EditSession::restore(store)))
}

/// Print the result of a dispatched intent
pub(crate) fn report(outcome: &DispatchOutcome, done: &str) {
    match outcome {
        DispatchOutcome::Applied { block_id: Some(block_id) } => {
            println!("  {} {} {}", "✓".green(), done, block_id.bright_white());
        }
        DispatchOutcome::Applied { block_id: None } => {
            println!("  {} {}", "✓".green(), done);
        }
        DispatchOutcome::Ignored { reason } => {
            println!("  {} {}", "⚠️".yellow(), reason);
        }
        DispatchOutcome::Unchanged => {
            println!("  {} Nothing to change", "•".dimmed());
        }
    }
}
