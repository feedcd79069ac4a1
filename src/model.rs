use chrono::{Duration, NaiveDate};
use std::fmt;

/// Markers whose first word is written this way take part in reminders.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What kind of task this is, along with the fields only that kind carries.
/// Markers are kept as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline { by: String },
    Event { from: String, to: String },
}

/// A single entry of the task list. Tasks have no identifier of their own:
/// they are addressed by their position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::ToDo)
    }

    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Deadline { by: by.into() })
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(
            description,
            TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// One-letter type tag used in renderings and in the journal.
    pub fn tag(&self) -> char {
        match self.kind {
            TaskKind::ToDo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Whether the task deserves attention within the next `days` days.
    ///
    /// Done tasks are never flagged. A deadline or event whose marker starts
    /// with a `YYYY-MM-DD` date is flagged once that date falls inside the
    /// window (overdue deadlines stay flagged, finished events are dropped).
    /// Anything else is treated like a to-do and flagged until it is done.
    pub fn is_to_be_reminded(&self, days: u32, today: NaiveDate) -> bool {
        if self.done {
            return false;
        }
        match &self.kind {
            TaskKind::ToDo => true,
            TaskKind::Deadline { by } => match leading_date(by) {
                Some(due) => within_window(due, days, today),
                None => true,
            },
            TaskKind::Event { from, to } => {
                if matches!(leading_date(to), Some(end) if end < today) {
                    return false;
                }
                match leading_date(from) {
                    Some(start) => within_window(start, days, today),
                    None => true,
                }
            }
        }
    }
}

fn leading_date(marker: &str) -> Option<NaiveDate> {
    marker
        .split_whitespace()
        .next()
        .and_then(|word| NaiveDate::parse_from_str(word, DATE_FORMAT).ok())
}

fn within_window(date: NaiveDate, days: u32, today: NaiveDate) -> bool {
    let window = Duration::days(i64::from(days));
    match today.checked_add_signed(window) {
        Some(horizon) => date <= horizon,
        None => true,
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.tag(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}
