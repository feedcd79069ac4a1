//! Duke, a chatty line-oriented task tracker.
//!
//! A [`Session`](session::Session) interprets one input line at a time
//! (`todo`, `deadline`, `event`, `list`, `mark`, `unmark`, `delete`,
//! `remind`, `bye`) and answers with a [`Response`](session::Response)
//! that the caller prints. The [`journal`] module keeps the task list in a
//! SQLite file between runs.

#[macro_use]
extern crate prettytable;

pub mod cli;
pub mod command;
pub mod error;
pub mod interface;
pub mod journal;
pub mod model;
pub mod parser;
pub mod session;

pub use error::DukeError;
pub use model::{Task, TaskKind};
pub use session::{Response, Session};
