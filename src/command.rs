use crate::error::{DukeError, Result};
use crate::parser::join;

/// Window used by `remind` when no number of days is given.
pub const DEFAULT_REMIND_DAYS: u32 = 7;

pub const UNKNOWN_COMMAND: &str = "I'm sorry, I could not understand that command.";

/// A validated command line. Indexes are kept exactly as typed (1-based,
/// possibly out of range): only the session knows how long the list is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Todo {
        description: String,
    },
    Deadline {
        description: String,
        by: String,
    },
    Event {
        description: String,
        from: String,
        to: String,
    },
    Remind(u32),
}

impl Command {
    /// Build a command out of the tokens of one input line. The first token
    /// selects the command, the rest are its arguments.
    pub fn parse(tokens: &[String]) -> Result<Command> {
        let key = match tokens.first() {
            Some(key) => key.as_str(),
            None => return Err(DukeError::invalid(UNKNOWN_COMMAND)),
        };
        match key {
            "bye" => Ok(Command::Bye),
            "list" => Ok(Command::List),
            "mark" => parse_index(tokens, "Mark", "mark").map(Command::Mark),
            "unmark" => parse_index(tokens, "Unmark", "unmark").map(Command::Unmark),
            "delete" => parse_index(tokens, "Delete", "delete").map(Command::Delete),
            "todo" => parse_todo(tokens),
            "deadline" => parse_deadline(tokens),
            "event" => parse_event(tokens),
            "remind" => parse_remind(tokens),
            _ => Err(DukeError::invalid(UNKNOWN_COMMAND)),
        }
    }
}

fn parse_index(tokens: &[String], name: &str, key: &str) -> Result<i64> {
    if tokens.len() != 2 {
        return Err(DukeError::invalid(format!(
            "Invalid input received!\n{} commands are in the form of: {} i\n(exactly one task number expected)",
            name, key
        )));
    }
    parse_number(&tokens[1])
}

fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(token: &str) -> Result<T> {
    token
        .parse::<T>()
        .map_err(|source| DukeError::MalformedNumber {
            token: token.to_string(),
            source,
        })
}

fn parse_todo(tokens: &[String]) -> Result<Command> {
    if tokens.len() < 2 {
        return Err(DukeError::invalid("todo cannot have no description!"));
    }
    Ok(Command::Todo {
        description: join(&tokens[1..]),
    })
}

fn parse_deadline(tokens: &[String]) -> Result<Command> {
    let by_id = position_of(tokens, "/by").ok_or_else(|| {
        DukeError::missing_marker(
            "Invalid input received!\nDeadline commands are in the form of: deadline name /by bytime\n(remember to include '/by')",
        )
    })?;
    Ok(Command::Deadline {
        description: join(&tokens[1..by_id]),
        by: join(&tokens[by_id + 1..]),
    })
}

fn parse_event(tokens: &[String]) -> Result<Command> {
    let (from_id, to_id) = match (position_of(tokens, "/from"), position_of(tokens, "/to")) {
        (Some(from_id), Some(to_id)) => (from_id, to_id),
        _ => {
            return Err(DukeError::missing_marker(
                "Invalid input received!\nEvent commands are in the form of: event name /from fromtime /to totime\n(remember to include '/from' and '/to')",
            ))
        }
    };
    if to_id < from_id {
        return Err(DukeError::missing_marker(
            "Invalid input received!\nEvent commands are in the form of: event name /from fromtime /to totime\n('/from' must come before '/to')",
        ));
    }
    Ok(Command::Event {
        description: join(&tokens[1..from_id]),
        from: join(&tokens[from_id + 1..to_id]),
        to: join(&tokens[to_id + 1..]),
    })
}

fn parse_remind(tokens: &[String]) -> Result<Command> {
    match tokens.len() {
        1 => Ok(Command::Remind(DEFAULT_REMIND_DAYS)),
        2 => parse_number(&tokens[1]).map(Command::Remind),
        _ => Err(DukeError::invalid(
            "Invalid input received!\nRemind commands are in the form of: remind [days]",
        )),
    }
}

/// Position of the first token equal to `marker`, skipping the command key.
fn position_of(tokens: &[String], marker: &str) -> Option<usize> {
    tokens
        .iter()
        .skip(1)
        .position(|token| token == marker)
        .map(|position| position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;

    fn parse(line: &str) -> Result<Command> {
        Command::parse(&tokenize(line))
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(parse("blah 1"), Err(DukeError::invalid(UNKNOWN_COMMAND)));
        assert_eq!(parse("LIST"), Err(DukeError::invalid(UNKNOWN_COMMAND)));
    }

    #[test]
    fn index_commands_need_exactly_one_argument() {
        assert_eq!(parse("mark 2"), Ok(Command::Mark(2)));
        assert_eq!(parse("unmark -1"), Ok(Command::Unmark(-1)));
        assert!(matches!(parse("mark"), Err(DukeError::InvalidCommand(_))));
        assert!(matches!(parse("delete 1 2"), Err(DukeError::InvalidCommand(_))));
    }

    #[test]
    fn non_numeric_index_is_malformed() {
        match parse("mark abc") {
            Err(DukeError::MalformedNumber { token, .. }) => assert_eq!(token, "abc"),
            other => panic!("unexpected {:?}", other),
        }
        match parse("mark 99999999999999999999") {
            Err(err @ DukeError::MalformedNumber { .. }) => {
                assert_eq!(err.to_error_code(), "MALFORMED_NUMBER");
                assert_eq!(err.to_string(), "'99999999999999999999' is not a valid number!");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn todo_joins_its_description() {
        assert_eq!(
            parse("todo read  the book"),
            Ok(Command::Todo {
                description: "read the book".to_string()
            })
        );
        assert_eq!(
            parse("todo"),
            Err(DukeError::invalid("todo cannot have no description!"))
        );
    }

    #[test]
    fn deadline_splits_on_by() {
        assert_eq!(
            parse("deadline return book /by June 6th"),
            Ok(Command::Deadline {
                description: "return book".to_string(),
                by: "June 6th".to_string()
            })
        );
        assert_eq!(
            parse("deadline /by tonight"),
            Ok(Command::Deadline {
                description: String::new(),
                by: "tonight".to_string()
            })
        );
        assert!(matches!(
            parse("deadline return book by June"),
            Err(DukeError::MissingMarker(_))
        ));
    }

    #[test]
    fn event_splits_on_from_and_to() {
        assert_eq!(
            parse("event project meeting /from Mon 2pm /to 4pm"),
            Ok(Command::Event {
                description: "project meeting".to_string(),
                from: "Mon 2pm".to_string(),
                to: "4pm".to_string()
            })
        );
        assert!(matches!(
            parse("event party /from 8pm"),
            Err(DukeError::MissingMarker(_))
        ));
        assert!(matches!(
            parse("event party /to 11pm /from 8pm"),
            Err(DukeError::MissingMarker(_))
        ));
    }

    #[test]
    fn remind_defaults_its_window() {
        assert_eq!(parse("remind"), Ok(Command::Remind(DEFAULT_REMIND_DAYS)));
        assert_eq!(parse("remind 3"), Ok(Command::Remind(3)));
        assert!(matches!(
            parse("remind -3"),
            Err(DukeError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse("remind 3 days"),
            Err(DukeError::InvalidCommand(_))
        ));
    }
}
