//! The interactive loop: greeting, saving after changes, stopping on bye.

use duke::interface::chat;
use duke::journal::{load_tasks, open_journal};
use duke::{Session, Task};
use tempfile::tempdir;

fn run(session: &mut Session, db: Option<&mut rusqlite::Connection>, input: &str) -> Vec<String> {
    let mut output = Vec::new();
    chat(session, db, input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn changes_are_saved_and_bye_stops_the_loop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("journal.sqlite");
    let mut db = open_journal(&path).unwrap();

    let mut session = Session::new();
    let output = run(&mut session, Some(&mut db), "todo a\nbye\ntodo b\n");

    assert_eq!(output.first().map(String::as_str), Some("Hello! I'm Duke"));
    assert_eq!(output[1], "What can I do for you?");
    assert_eq!(
        output.last().map(String::as_str),
        Some("Bye. Hope to see you again soon!")
    );
    assert!(!output.iter().any(|line| line.contains("] b")));
    assert!(!session.is_active());
    drop(db);

    let db = open_journal(&path).unwrap();
    assert_eq!(load_tasks(&db).unwrap(), vec![Task::todo("a")]);
}

#[test]
fn end_of_input_ends_the_conversation() {
    let mut session = Session::new();
    let output = run(&mut session, None, "todo a\n\nlist\n");

    assert!(session.is_active());
    assert_eq!(session.tasks().len(), 1);
    assert!(output.contains(&"1. [T][ ] a".to_string()));
    assert_eq!(
        output.last().map(String::as_str),
        Some("Bye. Hope to see you again soon!")
    );
}

#[test]
fn failed_save_is_reported_and_chat_goes_on() {
    let dir = tempdir().unwrap();
    let mut db = open_journal(&dir.path().join("journal.sqlite")).unwrap();
    db.execute("DROP TABLE task", []).unwrap();

    let mut session = Session::new();
    let output = run(&mut session, Some(&mut db), "todo a\ntodo b\nbye\n");

    let failures = output
        .iter()
        .filter(|line| line.starts_with("I could not save your tasks"))
        .count();
    assert_eq!(failures, 2);
    assert!(output.contains(&"Now you have 2 tasks in the list.".to_string()));
    assert_eq!(session.tasks().len(), 2);
}
