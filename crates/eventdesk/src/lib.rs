//! EventDesk CLI library.
//!
//! Argument parsing and terminal rendering for the EventDesk view-models.

pub mod cli;
pub mod commands;
