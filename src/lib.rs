//! # recall-flow
//!
//! A personal task and flashcard tracker with a lightweight
//! spaced-repetition workflow.
//!
//! ## Features
//!
//! - **Tasks**: scheduled for a due date, completed into a history table
//! - **Cards**: vocabulary cards with attempt/success statistics
//! - **Review queue**: never-reviewed and least recently reviewed items first
//! - **Atomic completion**: a task is moved into history in one transaction
//!
//! ## Usage
//!
//! ```rust,no_run
//! use recall_flow::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
