//! Command-line definition for `amt`. Exactly one action may be selected per
//! run; clap enforces the exclusivity and the numeric form of the record ID
//! so the rest of the program only ever sees validated input.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Debug, Parser)]
#[command(name = "amt", version)]
#[command(about = "Search, add, and remove acronym records held in a SQLite database")]
#[command(group(ArgGroup::new("action").args(["search", "new", "remove"])))]
pub struct Cli {
    /// Acronym to search for; may contain SQL wildcards (% and _)
    #[arg(short = 's', long, value_name = "PATTERN")]
    pub search: Option<String>,

    /// Add a new acronym record interactively
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Record ID to remove; use a search first to find the ID
    #[arg(short = 'r', long, value_name = "ID",
          value_parser = clap::value_parser!(i64).range(1..))]
    pub remove: Option<i64>,

    /// Database file to use, overriding $ACRODB and the default location
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show additional debug output while running
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// The one action a run performs, extracted from the parsed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    New,
    Remove(i64),
}

impl Cli {
    /// Map the exclusive flag group to an action, or `None` when the user
    /// passed no action flag at all.
    pub fn action(&self) -> Option<Action> {
        if let Some(pattern) = &self.search {
            return Some(Action::Search(pattern.clone()));
        }
        if self.new {
            return Some(Action::New);
        }
        self.remove.map(Action::Remove)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Cli};
    use clap::Parser;

    #[test]
    fn search_flag_selects_the_search_action() {
        let cli = Cli::try_parse_from(["amt", "-s", "KSLOC"]).unwrap();
        assert_eq!(cli.action(), Some(Action::Search("KSLOC".to_string())));
    }

    #[test]
    fn remove_takes_a_positive_numeric_id() {
        let cli = Cli::try_parse_from(["amt", "--remove", "42"]).unwrap();
        assert_eq!(cli.action(), Some(Action::Remove(42)));
    }

    #[test]
    fn non_numeric_remove_id_is_rejected() {
        assert!(Cli::try_parse_from(["amt", "-r", "abc"]).is_err());
        assert!(Cli::try_parse_from(["amt", "-r", "0"]).is_err());
    }

    #[test]
    fn actions_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["amt", "-s", "x", "-n"]).is_err());
        assert!(Cli::try_parse_from(["amt", "-n", "-r", "3"]).is_err());
    }

    #[test]
    fn no_action_flags_means_no_action() {
        let cli = Cli::try_parse_from(["amt", "-d"]).unwrap();
        assert_eq!(cli.action(), None);
        assert!(cli.debug);
    }

    #[test]
    fn file_override_combines_with_any_action() {
        let cli = Cli::try_parse_from(["amt", "-f", "/tmp/a.db", "-n"]).unwrap();
        assert_eq!(cli.action(), Some(Action::New));
        assert_eq!(cli.file.as_deref().unwrap().to_str(), Some("/tmp/a.db"));
    }
}
