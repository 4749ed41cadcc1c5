use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Track library books and checkouts in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file (overrides the data-file config value)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the inventory
    #[command(alias = "a", display_order = 1)]
    Add {
        title: String,
        author: String,
        isbn: String,
    },

    /// Check a book out by ISBN
    #[command(display_order = 2)]
    Issue { isbn: String },

    /// Check a book back in by ISBN
    #[command(display_order = 3)]
    Return { isbn: String },

    /// List every book
    #[command(alias = "ls", display_order = 4)]
    List,

    /// Search books by title, or by exact ISBN with --isbn
    #[command(display_order = 5)]
    Search {
        /// Case-insensitive title fragment
        #[arg(required_unless_present = "isbn")]
        term: Option<String>,

        /// Exact ISBN to look up
        #[arg(long, conflicts_with = "term")]
        isbn: Option<String>,
    },

    /// Run the interactive menu (default when no command is given)
    #[command(display_order = 6)]
    Menu,

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add() {
        let cli =
            Cli::try_parse_from(["bookshelf", "add", "Dune", "Frank Herbert", "111"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                author,
                isbn,
            }) => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(isbn, "111");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["bookshelf", "list", "--file", "x.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn search_needs_term_or_isbn() {
        assert!(Cli::try_parse_from(["bookshelf", "search"]).is_err());
        assert!(Cli::try_parse_from(["bookshelf", "search", "dune", "--isbn", "1"]).is_err());

        let cli = Cli::try_parse_from(["bookshelf", "search", "--isbn", "111"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Search { term: None, isbn: Some(_) })
        ));
    }

    #[test]
    fn return_is_a_subcommand() {
        let cli = Cli::try_parse_from(["bookshelf", "return", "111"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Return { .. })));
    }
}
