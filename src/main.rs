use anyhow::{Context, Result};
use chrono::Local;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

use duke::cli::{window_days, Command::*, CommandLineArgs};
use duke::interface;
use duke::journal::{load_tasks, open_journal};
use duke::Session;

fn find_default_journal_file() -> Result<PathBuf> {
    let base_dirs = ProjectDirs::from("com", "duke", "duke")
        .context("Failed to find a home directory for the journal file.")?;
    let root_dir = base_dirs.data_dir();
    if !root_dir.exists() {
        std::fs::create_dir_all(root_dir)
            .with_context(|| format!("Failed to create directory {}.", root_dir.display()))?;
    }
    let mut path = PathBuf::from(root_dir);
    path.push("journal.sqlite");
    Ok(path)
}

fn main() -> Result<()> {
    env_logger::init();

    // Get the command-line arguments.
    let CommandLineArgs {
        action,
        journal_file,
        no_journal,
    } = CommandLineArgs::from_args();

    let mut journal = if no_journal {
        None
    } else {
        let journal_file = match journal_file {
            Some(path) => path,
            None => find_default_journal_file()?,
        };
        Some(open_journal(&journal_file)?)
    };

    let tasks = match &journal {
        Some(db) => load_tasks(db)?,
        None => Vec::new(),
    };
    let mut session = Session::with_tasks(tasks);

    // Perform the action.
    match action.unwrap_or(Chat) {
        Chat => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            interface::chat(&mut session, journal.as_mut(), stdin.lock(), &mut stdout)?
        }
        List => interface::list(&session),
        Remind { within } => {
            interface::remind(&session, window_days(within), Local::now().date_naive())
        }
    }
    Ok(())
}
