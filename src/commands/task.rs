use super::confirm;
use crate::{
    db::db::Db,
    libs::{
        date::{display, now},
        lifecycle::Lifecycle,
        messages::Message,
        task::TaskRequest,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a task
    Add {
        /// Task title, up to 250 characters
        title: String,
        /// When the task is due, YYYY-MM-DDTHH:MM[:SS]
        #[arg(long)]
        due: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Low, Medium or High, any case; empty or "none" clears it
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Show active and completed tasks
    List {
        /// Only active tasks whose due date has passed
        #[arg(long)]
        overdue: bool,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Replace every field of a task
    Edit {
        id: i64,
        #[arg(short, long)]
        title: String,
        #[arg(long)]
        due: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Low, Medium or High, any case; empty or "none" clears it
        #[arg(short, long)]
        priority: Option<String>,
        /// Override the creation timestamp
        #[arg(long)]
        created_at: Option<String>,
    },
    /// Move a task to a new due date
    Reschedule {
        id: i64,
        /// New due date, YYYY-MM-DDTHH:MM[:SS]
        due: String,
    },
    /// Complete a task and move it to history
    Done { id: i64 },
    /// Delete a task without archiving it
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: TaskArgs, db: &Db) -> Result<()> {
    let engine = Lifecycle::new(db);

    match args.command {
        TaskCommand::Add {
            title,
            due,
            description,
            priority,
        } => {
            let request = TaskRequest {
                title,
                description,
                next_review_date: due,
                priority,
                created_at: None,
            };
            let task = engine.create_task(&request)?;
            msg_success!(Message::TaskCreated(task.id, task.title));
        }
        TaskCommand::List { overdue, json } => handle_list(&engine, overdue, json)?,
        TaskCommand::Edit {
            id,
            title,
            due,
            description,
            priority,
            created_at,
        } => {
            let request = TaskRequest {
                title,
                description,
                next_review_date: due,
                priority,
                created_at,
            };
            engine.edit_task(id, &request)?;
            msg_success!(Message::TaskUpdated(id));
        }
        TaskCommand::Reschedule { id, due } => {
            let task = engine.reschedule_task(id, &due)?;
            let due = display(&task.next_review_date);
            msg_success!(Message::TaskRescheduled(id, due));
        }
        TaskCommand::Done { id } => {
            let record = engine.complete_task(id)?;
            msg_success!(Message::TaskCompleted(id, record.title));
        }
        TaskCommand::Delete { id, yes } => {
            if !confirm(Message::ConfirmDeleteTask(id), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            engine.delete_task(id)?;
            msg_success!(Message::TaskDeleted(id));
        }
    }

    Ok(())
}

fn handle_list(engine: &Lifecycle, overdue: bool, json: bool) -> Result<()> {
    let now = now();

    if overdue {
        let tasks = engine.overdue_tasks(now)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        } else if tasks.is_empty() {
            msg_info!(Message::NoOverdueTasks);
        } else {
            msg_print!(Message::ActiveTasksHeader(tasks.len()));
            View::tasks(&tasks, now);
        }
        return Ok(());
    }

    let overview = engine.overview()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    if overview.tasks.is_empty() {
        msg_info!(Message::NoActiveTasks);
    } else {
        msg_print!(Message::ActiveTasksHeader(overview.tasks.len()));
        View::tasks(&overview.tasks, now);
    }

    if overview.succeeded_tasks.is_empty() {
        msg_info!(Message::NoSucceededTasks);
    } else {
        msg_print!(Message::SucceededTasksHeader(overview.succeeded_tasks.len()));
        View::succeeded_tasks(&overview.succeeded_tasks);
    }

    Ok(())
}
