use anyhow::{Context, Result};
use chrono::NaiveDate;
use prettytable::Table;
use rusqlite::Connection;
use std::io::{BufRead, Write};

use crate::journal::save_tasks;
use crate::model::{Task, TaskKind};
use crate::session::Session;

/// Descriptions wider than this wrap inside their cell.
const DESCRIPTION_WIDTH: usize = 40;

/// Read commands from `input` until the user says bye or input runs out,
/// writing every answer to `output` and saving the journal after every
/// change. A failed save is reported and the conversation goes on.
pub fn chat<R: BufRead, W: Write>(
    session: &mut Session,
    mut journal: Option<&mut Connection>,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Hello! I'm Duke")?;
    writeln!(output, "What can I do for you?")?;

    for line in input.lines() {
        let line = line.context("Failed to read input.")?;
        let response = session.receive_input(&line);
        for text in &response.lines {
            writeln!(output, "{}", text)?;
        }

        if response.changed {
            if let Some(db) = journal.as_mut() {
                if let Err(err) = save_tasks(db, session.tasks()) {
                    log::error!("Failed to save journal: {:#}", err);
                    writeln!(output, "I could not save your tasks: {:#}", err)?;
                }
            }
        }

        if !session.is_active() {
            break;
        }
    }

    writeln!(output, "Bye. Hope to see you again soon!")?;
    Ok(())
}

/// Print every task of the session as a table.
pub fn list(session: &Session) {
    let indexed: Vec<(usize, &Task)> = session
        .tasks()
        .iter()
        .enumerate()
        .map(|(position, task)| (position + 1, task))
        .collect();

    if indexed.is_empty() {
        println!("Your task list is empty.");
        return;
    }
    task_table(&indexed).printstd();
}

/// Print the tasks flagged for the next `days` days as a table.
pub fn remind(session: &Session, days: u32, today: NaiveDate) {
    let flagged = session.reminders(days, today);
    if flagged.is_empty() {
        println!("Nothing to keep in mind for the next {} days.", days);
        return;
    }
    println!("Tasks to keep in mind for the next {} days:", days);
    task_table(&flagged).printstd();
}

pub fn task_table(tasks: &[(usize, &Task)]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["id", "type", "done", "task", "when"]);
    for (index, task) in tasks {
        table.add_row(row![
            index,
            task.tag(),
            task.status_icon(),
            textwrap::fill(&task.description, DESCRIPTION_WIDTH),
            fmt_when(task)
        ]);
    }
    table
}

fn fmt_when(task: &Task) -> String {
    match &task.kind {
        TaskKind::ToDo => String::new(),
        TaskKind::Deadline { by } => format!("by {}", by),
        TaskKind::Event { from, to } => format!("{} - {}", from, to),
    }
}
