use crate::{
    db::db::Db,
    libs::{card::Card, config::Config, lifecycle::Lifecycle, messages::Message},
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Cards in this session, defaults to the configured batch size
    #[arg(short, long)]
    limit: Option<usize>,
}

pub fn cmd(args: ReviewArgs, db: &Db, config: &Config) -> Result<()> {
    let engine = Lifecycle::new(db);
    let batch = engine.review_batch(args.limit.unwrap_or(config.review_batch_size))?;

    if batch.is_empty() {
        msg_info!(Message::NoCardsToReview);
        return Ok(());
    }

    msg_print!(Message::ReviewSessionHeader(batch.len()));
    let theme = ColorfulTheme::default();
    let mut correct = 0;

    for card in &batch {
        println!();
        msg_print!(Message::ReviewWord(card.word.clone()));

        let answer: String = Input::with_theme(&theme)
            .with_prompt(Message::ReviewAnswerPrompt.to_string())
            .allow_empty(true)
            .interact_text()?;

        msg_print!(Message::ReviewTranslation(card.translation.clone()));
        if let Some(example) = &card.example {
            msg_print!(Message::ReviewExample(example.clone()));
        }

        let remembered = Confirm::with_theme(&theme)
            .with_prompt(Message::ReviewPrompt.to_string())
            .default(matches_translation(card, &answer))
            .interact()?;

        engine.review_card(card.id, remembered)?;
        if remembered {
            correct += 1;
            msg_success!(Message::ReviewCorrect);
        } else {
            msg_warning!(Message::ReviewIncorrect);
        }
    }

    println!();
    msg_print!(Message::ReviewSessionFinished(batch.len(), correct));
    Ok(())
}

fn matches_translation(card: &Card, answer: &str) -> bool {
    let answer = answer.trim();
    !answer.is_empty() && answer.to_lowercase() == card.translation.trim().to_lowercase()
}
