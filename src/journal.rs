use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::model::{Task, TaskKind};

/// Get a connection to the journal database, creating it if it does
/// not exist.
pub fn open_journal(journal_path: &Path) -> Result<Connection> {
    log::debug!("Opening journal at {}", journal_path.display());
    let db = Connection::open(journal_path)
        .with_context(|| format!("Failed to open journal {}.", journal_path.display()))?;
    init_journal(&db)?;
    Ok(db)
}

/// Create the task table if it is not there yet.
pub fn init_journal(db: &Connection) -> Result<()> {
    db.execute(
        "CREATE TABLE if not exists task (
                  id              INTEGER PRIMARY KEY AUTOINCREMENT,
                  position        INTEGER NOT NULL UNIQUE,
                  kind            TEXT NOT NULL,
                  description     TEXT NOT NULL,
                  done            INTEGER NOT NULL,
                  by_marker       TEXT,
                  from_marker     TEXT,
                  to_marker       TEXT
                  )",
        [],
    )
    .context("Failed to create task table.")?;
    Ok(())
}

/// Read back the task list, in list order.
pub fn load_tasks(db: &Connection) -> Result<Vec<Task>> {
    let mut stmt = db
        .prepare("SELECT kind, description, done, by_marker, from_marker, to_marker FROM task ORDER BY position")
        .context("Failed to fetch tasks from journal.")?;
    let rows = stmt
        .query_map([], row_from_db)
        .context("Failed to fetch tasks from journal.")?;

    let mut tasks = Vec::new();
    for row in rows {
        let row = row.context("Failed to read task row from journal.")?;
        tasks.push(row.into_task()?);
    }
    log::debug!("Loaded {} tasks from journal", tasks.len());
    Ok(tasks)
}

/// Replace the journal's content with `tasks`. Positions are 1-based, as
/// shown to the user.
pub fn save_tasks(db: &mut Connection, tasks: &[Task]) -> Result<()> {
    let tx = db.transaction().context("Failed to start journal transaction.")?;
    tx.execute("DELETE FROM task", [])
        .context("Failed to clear tasks from journal.")?;
    for (position, task) in tasks.iter().enumerate() {
        let (by, from, to) = match &task.kind {
            TaskKind::ToDo => (None, None, None),
            TaskKind::Deadline { by } => (Some(by.as_str()), None, None),
            TaskKind::Event { from, to } => (None, Some(from.as_str()), Some(to.as_str())),
        };
        tx.execute(
            "INSERT INTO task (position, kind, description, done, by_marker, from_marker, to_marker) VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                (position + 1) as i64,
                task.tag().to_string(),
                task.description,
                task.done,
                by,
                from,
                to
            ],
        )
        .context("Failed to insert task to journal.")?;
    }
    tx.commit().context("Failed to commit journal.")?;
    log::debug!("Saved {} tasks to journal", tasks.len());
    Ok(())
}

/// A task row as stored: [kind, description, done, by, from, to]
struct TaskRow {
    kind: String,
    description: String,
    done: bool,
    by: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

fn row_from_db(row: &Row) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        kind: row.get(0)?,
        description: row.get(1)?,
        done: row.get(2)?,
        by: row.get(3)?,
        from: row.get(4)?,
        to: row.get(5)?,
    })
}

impl TaskRow {
    fn into_task(self) -> Result<Task> {
        let TaskRow {
            kind,
            description,
            done,
            by,
            from,
            to,
        } = self;
        let kind = match kind.as_str() {
            "T" => TaskKind::ToDo,
            "D" => match by {
                Some(by) => TaskKind::Deadline { by },
                None => return Err(anyhow!("Deadline '{}' has no by marker.", description)),
            },
            "E" => match (from, to) {
                (Some(from), Some(to)) => TaskKind::Event { from, to },
                _ => return Err(anyhow!("Event '{}' is missing its time markers.", description)),
            },
            other => return Err(anyhow!("Unknown task kind '{}' in journal.", other)),
        };
        Ok(Task {
            description,
            done,
            kind,
        })
    }
}
