use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release
/// builds. Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cardz", bin_name = "cardz", version = get_version())]
#[command(about = "Browse, search and curate a catalog of technology cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Load the catalog from this JSON file instead of the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Read config.json from this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive session (default)
    Session,

    /// Print the catalog once, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text matched against titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Category name or chip number (0 = all)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print the category filters derived from the catalog
    Categories,

    /// Print the categories a new card can be created with
    FormCategories,
}

/// One line typed in the session, parsed with the first word as the command.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Filter by title or description; no text clears the search
    #[command(alias = "s")]
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Select a category by name or chip number (0 = all)
    #[command(alias = "c")]
    Cat {
        #[arg(required = true, num_args = 1..)]
        category: Vec<String>,
    },

    /// Toggle favorite on cards (index or #id)
    #[command(alias = "f")]
    Fav {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },

    /// Delete cards (index or #id)
    #[command(alias = "delete", alias = "del")]
    Rm {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },

    /// Show cards in full (index or #id)
    #[command(alias = "view")]
    Show {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },

    /// Open the form to create a card
    #[command(alias = "new")]
    Add,

    /// Show the catalog again
    #[command(alias = "list")]
    Ls,

    /// Clear the search and select all categories
    Reset,

    /// List session commands
    #[command(alias = "?")]
    Help,

    /// Leave the session
    #[command(alias = "exit", alias = "q")]
    Quit,
}

impl SessionLine {
    /// Parses a raw input line. Words are split on whitespace, except for
    /// `search`, whose text is everything after the command word and its
    /// separator, spacing kept as typed.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        let mut parsed = Self::try_parse_from(line.split_whitespace())?;
        if let SessionCommand::Search { text } = &mut parsed.command {
            let rest = after_command_word(line);
            *text = if rest.is_empty() {
                Vec::new()
            } else {
                vec![rest.to_string()]
            };
        }
        Ok(parsed)
    }
}

/// The part of `line` after its first word and the single whitespace
/// character that ends it.
fn after_command_word(line: &str) -> &str {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(at) => {
            let mut rest = line[at..].chars();
            rest.next();
            rest.as_str()
        }
        None => "",
    }
}

/// Help text listing the session commands with their descriptions.
pub fn session_help() -> String {
    let cmd = SessionLine::command();
    let mut output = String::from("Commands:\n");
    for sc in cmd.get_subcommands().filter(|sc| !sc.is_hide_set()) {
        let name = match sc.get_all_aliases().next() {
            Some(alias) => format!("{}, {}", sc.get_name(), alias),
            None => sc.get_name().to_string(),
        };
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<14} {}\n", name, about));
    }
    output.push_str("\nCards are selected by on-screen index (1, 2, ...) or by id (#id).\n");
    output
}
