use chrono::{Local, NaiveDate};

use crate::command::Command;
use crate::error::{DukeError, Result};
use crate::model::Task;
use crate::parser::tokenize;

/// What a single input line produced: the text to show the user, whether
/// the task list changed, and the failure if the command was rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    pub lines: Vec<String>,
    pub changed: bool,
    pub failure: Option<DukeError>,
}

impl Response {
    fn lines(lines: Vec<String>) -> Self {
        Response {
            lines,
            ..Default::default()
        }
    }

    fn changed(lines: Vec<String>) -> Self {
        Response {
            lines,
            changed: true,
            failure: None,
        }
    }

    fn failed(error: DukeError) -> Self {
        Response {
            lines: error.to_string().lines().map(str::to_owned).collect(),
            changed: false,
            failure: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// The interpreter state: the ordered task list and whether the user is
/// still talking to us.
#[derive(Debug, Clone)]
pub struct Session {
    tasks: Vec<Task>,
    active: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Resume a session over a previously saved task list.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Session {
            tasks,
            active: true,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle one raw input line. Rejected commands are reported in the
    /// response and leave the task list untouched; nothing escapes to the
    /// caller. A blank line does nothing.
    pub fn receive_input(&mut self, input: &str) -> Response {
        self.receive_input_at(input, Local::now().date_naive())
    }

    /// Same as [`Session::receive_input`], with reminders computed
    /// relative to `today`.
    pub fn receive_input_at(&mut self, input: &str, today: NaiveDate) -> Response {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return Response::default();
        }

        let result = Command::parse(&tokens).and_then(|command| {
            log::debug!("Dispatching {:?}", command);
            self.execute(command, today)
        });

        match result {
            Ok(response) => response,
            Err(err) => {
                log::warn!(
                    "Rejected '{}' ({}): {}",
                    tokens[0],
                    err.to_error_code(),
                    err
                );
                Response::failed(err)
            }
        }
    }

    /// Run an already validated command against the task list.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> Result<Response> {
        match command {
            Command::Bye => {
                self.active = false;
                Ok(Response::default())
            }
            Command::List => Ok(Response::lines(self.list_lines())),
            Command::Mark(index) => {
                let task = self.task_at_mut(index)?;
                task.mark_done();
                Ok(Response::changed(vec![
                    "Nice! I've marked this task as done:".to_string(),
                    task.to_string(),
                ]))
            }
            Command::Unmark(index) => {
                let task = self.task_at_mut(index)?;
                task.unmark();
                Ok(Response::changed(vec![
                    "OK, I've marked this task as not done yet:".to_string(),
                    task.to_string(),
                ]))
            }
            Command::Delete(index) => {
                let position = self.position(index)?;
                let task = self.tasks.remove(position);
                Ok(Response::changed(vec![
                    "Noted. I've removed this task:".to_string(),
                    task.to_string(),
                    self.count_line(),
                ]))
            }
            Command::Todo { description } => Ok(self.add(Task::todo(description))),
            Command::Deadline { description, by } => Ok(self.add(Task::deadline(description, by))),
            Command::Event {
                description,
                from,
                to,
            } => Ok(self.add(Task::event(description, from, to))),
            Command::Remind(days) => Ok(Response::lines(self.remind_lines(days, today))),
        }
    }

    /// Tasks flagged for the next `days` days, with their 1-based index.
    pub fn reminders(&self, days: u32, today: NaiveDate) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.is_to_be_reminded(days, today))
            .map(|(position, task)| (position + 1, task))
            .collect()
    }

    fn add(&mut self, task: Task) -> Response {
        let rendering = task.to_string();
        self.tasks.push(task);
        Response::changed(vec![
            "Got it. I've added this task:".to_string(),
            rendering,
            self.count_line(),
        ])
    }

    fn list_lines(&self) -> Vec<String> {
        let mut lines = vec!["Here are the tasks in your list: ".to_string()];
        lines.extend(
            self.tasks
                .iter()
                .enumerate()
                .map(|(position, task)| format!("{}. {}", position + 1, task)),
        );
        lines.push("End of task list.".to_string());
        lines
    }

    fn remind_lines(&self, days: u32, today: NaiveDate) -> Vec<String> {
        let mut lines = vec![format!(
            "Here are the tasks to keep in mind for the next {} days:",
            days
        )];
        lines.extend(
            self.reminders(days, today)
                .into_iter()
                .map(|(index, task)| format!("{}. {}", index, task)),
        );
        lines.push("End of reminders.".to_string());
        lines
    }

    fn count_line(&self) -> String {
        format!("Now you have {} tasks in the list.", self.tasks.len())
    }

    /// Translate a 1-based user index into a list position.
    fn position(&self, index: i64) -> Result<usize> {
        if index < 1 || index > self.tasks.len() as i64 {
            return Err(DukeError::invalid(format!("index {} not in range!", index)));
        }
        Ok((index - 1) as usize)
    }

    fn task_at_mut(&mut self, index: i64) -> Result<&mut Task> {
        let position = self.position(index)?;
        Ok(&mut self.tasks[position])
    }
}
