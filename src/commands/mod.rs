pub mod card;
pub mod history;
pub mod init;
pub mod migrations;
pub mod review;
pub mod task;

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage completed tasks")]
    History(history::HistoryArgs),
    #[command(about = "Manage flashcards")]
    Card(card::CardArgs),
    #[command(about = "Review the next batch of flashcards")]
    Review(review::ReviewArgs),
    #[command(about = "Inspect the database schema")]
    Db(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::read()?;

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args, &open_db(&config)?),
            Commands::History(args) => history::cmd(args, &open_db(&config)?),
            Commands::Card(args) => card::cmd(args, &open_db(&config)?),
            Commands::Review(args) => review::cmd(args, &open_db(&config)?, &config),
            Commands::Db(args) => migrations::cmd(args, &config.db_path()?),
        }
    }
}

/// Opens the configured database, applying pending migrations.
fn open_db(config: &Config) -> Result<Db> {
    let db_path = config.db_path()?;
    let db = Db::open(&db_path)?;
    msg_debug!(Message::DatabaseOpened(db_path.display().to_string()));
    Ok(db)
}

/// Asks before a destructive action unless `assume_yes` is set.
pub(crate) fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
