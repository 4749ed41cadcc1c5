//! Context setup and per-subcommand handlers.
//!
//! - `run()`: parse, init logging, build the context, dispatch
//! - `init_context()`: resolves the config dir and data file, opens the API
//! - `handle_*()`: call the API and print the result

use super::logging;
use super::menu::run_menu;
use super::render::{print_messages, render_books, render_config};
use super::setup::{Cli, Commands};
use bookshelf::api::{ConfigAction, LibraryApi};
use bookshelf::config::LibraryConfig;
use bookshelf::error::Result;
use bookshelf::store::fs::JsonFileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: LibraryApi<JsonFileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            isbn,
        }) => handle_add(&mut ctx, title, author, isbn),
        Some(Commands::Issue { isbn }) => handle_issue(&mut ctx, &isbn),
        Some(Commands::Return { isbn }) => handle_return(&mut ctx, &isbn),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Search { term, isbn }) => handle_search(&ctx, term, isbn),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    let config = LibraryConfig::load(&config_dir)?;
    let data_file = cli.file.clone().unwrap_or(config.data_file);
    debug!(
        "config dir {}, data file {}",
        config_dir.display(),
        data_file.display()
    );

    let api = LibraryApi::open(JsonFileStore::new(data_file), config_dir);
    Ok(AppContext { api })
}

fn default_config_dir() -> PathBuf {
    ProjectDirs::from("org", "bookshelf", "bookshelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn handle_add(ctx: &mut AppContext, title: String, author: String, isbn: String) -> Result<()> {
    let result = ctx.api.add_book(title, author, isbn)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_issue(ctx: &mut AppContext, isbn: &str) -> Result<()> {
    let result = ctx.api.issue_book(isbn)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_return(ctx: &mut AppContext, isbn: &str) -> Result<()> {
    let result = ctx.api.return_book(isbn)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    print!("{}", render_books(&result.listed_books));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: Option<String>, isbn: Option<String>) -> Result<()> {
    let result = match (isbn, term) {
        (Some(isbn), _) => ctx.api.search_isbn(&isbn)?,
        (None, term) => ctx.api.search_title(term.as_deref().unwrap_or_default())?,
    };
    print!("{}", render_books(&result.listed_books));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_menu(&mut ctx.api, &mut input, &mut output)
}
