//! subport CLI library.
//!
//! This crate provides the command handlers, credential prompting, and
//! terminal helpers behind the `subport` binary.

pub mod commands;
pub mod output;
pub mod prompt;
pub mod terminal;
