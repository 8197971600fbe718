use super::confirm;
use crate::{
    db::db::Db,
    libs::{card::CardRequest, lifecycle::Lifecycle, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct CardArgs {
    #[command(subcommand)]
    command: CardCommand,
}

#[derive(Debug, Subcommand)]
enum CardCommand {
    /// Create a flashcard
    Add {
        word: String,
        translation: String,
        /// Example sentence
        #[arg(short, long)]
        example: Option<String>,
        /// Low, Medium or High, any case; empty or "none" clears it
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Show all cards in review order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Replace the text of a card; statistics are kept
    Edit {
        id: i64,
        #[arg(short, long)]
        word: String,
        #[arg(short, long)]
        translation: String,
        #[arg(short, long)]
        example: Option<String>,
        /// Low, Medium or High, any case; empty or "none" clears it
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Delete a card and its statistics
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    /// Record a single review result
    Review {
        id: i64,
        /// The answer was wrong
        #[arg(long)]
        failed: bool,
    },
}

pub fn cmd(args: CardArgs, db: &Db) -> Result<()> {
    let engine = Lifecycle::new(db);

    match args.command {
        CardCommand::Add {
            word,
            translation,
            example,
            priority,
        } => {
            let request = CardRequest {
                word,
                translation,
                example,
                priority,
            };
            let card = engine.create_card(&request)?;
            msg_success!(Message::CardCreated(card.id, card.word));
        }
        CardCommand::List { json } => {
            let cards = engine.list_cards()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else if cards.is_empty() {
                msg_info!(Message::NoCards);
            } else {
                msg_print!(Message::CardsHeader(cards.len()));
                View::cards(&cards);
            }
        }
        CardCommand::Edit {
            id,
            word,
            translation,
            example,
            priority,
        } => {
            let request = CardRequest {
                word,
                translation,
                example,
                priority,
            };
            engine.edit_card(id, &request)?;
            msg_success!(Message::CardUpdated(id));
        }
        CardCommand::Delete { id, yes } => {
            if !confirm(Message::ConfirmDeleteCard(id), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            engine.delete_card(id)?;
            msg_success!(Message::CardDeleted(id));
        }
        CardCommand::Review { id, failed } => {
            let card = engine.review_card(id, !failed)?;
            msg_success!(Message::CardReviewed(card.id, card.attempts, card.successes));
        }
    }

    Ok(())
}
