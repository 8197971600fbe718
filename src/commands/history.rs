use super::confirm;
use crate::{
    db::db::Db,
    libs::{lifecycle::Lifecycle, messages::Message, task::SucceededTaskRequest},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

#[derive(Debug, Subcommand)]
enum HistoryCommand {
    /// Replace title, description and priority of a completed task
    Edit {
        id: i64,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Low, Medium or High, any case; empty or "none" clears it
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Delete a completed task record
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: HistoryArgs, db: &Db) -> Result<()> {
    let engine = Lifecycle::new(db);

    match args.command {
        HistoryCommand::Edit {
            id,
            title,
            description,
            priority,
        } => {
            let request = SucceededTaskRequest {
                title,
                description,
                priority,
            };
            engine.edit_succeeded_task(id, &request)?;
            msg_success!(Message::SucceededTaskUpdated(id));
        }
        HistoryCommand::Delete { id, yes } => {
            if !confirm(Message::ConfirmDeleteSucceededTask(id), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            engine.delete_succeeded_task(id)?;
            msg_success!(Message::SucceededTaskDeleted(id));
        }
    }

    Ok(())
}
