use super::Repository;
use crate::libs::card::{Card, CardDraft};
use crate::libs::error::Entity;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_CARD: &str =
    "INSERT INTO cards (word, translation, example, priority, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)";
const SELECT_CARDS: &str =
    "SELECT id, word, translation, example, priority, attempts, successes, created_at, updated_at, last_reviewed FROM cards";
const WHERE_ID: &str = "WHERE id = ?1";
// Never-reviewed cards first, then least recently reviewed.
const ORDER_BY_REVIEW: &str = "ORDER BY last_reviewed IS NOT NULL, last_reviewed, id";
const UPDATE_CARD: &str = "UPDATE cards SET word = ?2, translation = ?3, example = ?4, priority = ?5, updated_at = ?6 WHERE id = ?1";
const RECORD_REVIEW: &str = "UPDATE cards SET attempts = attempts + 1, successes = successes + ?2, last_reviewed = ?3, updated_at = ?3 WHERE id = ?1";
const DELETE_CARD: &str = "DELETE FROM cards WHERE id = ?1";

pub struct Cards<'c> {
    conn: &'c Connection,
}

impl<'c> Cards<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Cards { conn }
    }

    /// Bumps the counters and review timestamps in a single statement.
    pub fn record_review(&self, id: i64, success: bool, reviewed_at: NaiveDateTime) -> rusqlite::Result<usize> {
        self.conn.execute(RECORD_REVIEW, params![id, i64::from(success), reviewed_at])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Card> {
        Ok(Card {
            id: row.get(0)?,
            word: row.get(1)?,
            translation: row.get(2)?,
            example: row.get(3)?,
            priority: row.get(4)?,
            attempts: row.get(5)?,
            successes: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
            last_reviewed: row.get(9)?,
        })
    }
}

impl Repository for Cards<'_> {
    type Item = Card;
    type Draft = CardDraft;

    const ENTITY: Entity = Entity::Card;

    fn insert(&self, draft: &CardDraft, now: NaiveDateTime) -> rusqlite::Result<Card> {
        self.conn.execute(
            INSERT_CARD,
            params![draft.word, draft.translation, draft.example, draft.priority, now],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    fn get_by_id(&self, id: i64) -> rusqlite::Result<Option<Card>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_CARDS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    fn list_ordered(&self) -> rusqlite::Result<Vec<Card>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_CARDS, ORDER_BY_REVIEW))?;
        let card_iter = stmt.query_map([], Self::from_row)?;

        let mut cards = Vec::new();
        for card in card_iter {
            cards.push(card?);
        }
        Ok(cards)
    }

    fn update(&self, id: i64, draft: &CardDraft, now: NaiveDateTime) -> rusqlite::Result<usize> {
        self.conn.execute(
            UPDATE_CARD,
            params![id, draft.word, draft.translation, draft.example, draft.priority, now],
        )
    }

    fn delete(&self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_CARD, params![id])
    }
}
