use humantime::parse_duration;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Talk to Duke, one command per line (default).
    Chat,
    /// List all tasks in the journal file.
    List,
    /// Show the tasks to keep in mind soon.
    Remind {
        /// How far ahead to look (e.g. "3days", "1week").
        #[structopt(short, long, default_value = "7days", parse(try_from_str=parse_duration))]
        within: Duration,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Duke",
    about = "A chatty personal task tracker."
)]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Option<Command>,

    /// Use a different journal file.
    #[structopt(parse(from_os_str), short, long)]
    pub journal_file: Option<PathBuf>,

    /// Keep tasks in memory only.
    #[structopt(long)]
    pub no_journal: bool,
}

/// Number of whole days covered by `window`, rounding partial days up.
pub fn window_days(window: Duration) -> u32 {
    let days = window.as_secs().saturating_add(SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    days.min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_round_up_to_days() {
        assert_eq!(window_days(parse_duration("3days").unwrap()), 3);
        assert_eq!(window_days(parse_duration("1day 1h").unwrap()), 2);
        assert_eq!(window_days(parse_duration("0s").unwrap()), 0);
    }

    #[test]
    fn remind_defaults_to_a_week() {
        let args = CommandLineArgs::from_iter(&["duke", "remind"]);
        match args.action {
            Some(Command::Remind { within }) => assert_eq!(window_days(within), 7),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!args.no_journal);
    }

    #[test]
    fn chat_is_optional() {
        let args = CommandLineArgs::from_iter(&["duke", "--no-journal"]);
        assert!(args.action.is_none());
        assert!(args.no_journal);
    }
}
