//! # CLI Layer
//!
//! This module is **one possible UI client** for cardz, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: loads config and seed data, builds the `CardzApi`
//! - `handle_*()`: per-command handlers that call the API and print the result
//!
//! CLI tests should not test catalog logic; that is the command layer's job.

use super::render::{render_screen, render_text_list, RenderOptions};
use super::session::Session;
use super::setup::{Cli, Commands};
use cardz::api::CardzApi;
use cardz::config::CardzConfig;
use cardz::error::{CardzError, Result};
use cardz::form::CardForm;
use cardz::logging::{init_logging, Verbosity};
use cardz::store::memory::InMemoryStore;
use cardz::store::seed;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: CardzApi<InMemoryStore>,
    config: CardzConfig,
    options: RenderOptions,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_occurrences(cli.verbose));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Session) => handle_session(ctx),
        Some(Commands::List { search, category }) => handle_list(&mut ctx, search, category),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::FormCategories) => handle_form_categories(&ctx),
    }
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "cardz", "cardz").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir(cli) {
        Some(dir) => CardzConfig::load(&dir)?,
        None => CardzConfig::default(),
    };

    // --seed wins over the config file, which wins over the bundled dataset
    let cards = match cli.seed.as_ref().or(config.seed_path.as_ref()) {
        Some(path) => seed::load(path)?,
        None => seed::bundled()?,
    };
    debug!(cards = cards.len(), "catalog seeded");

    let api = CardzApi::new(InMemoryStore::from_cards(cards))
        .with_placeholder_base(config.placeholder_base.clone());

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let options = RenderOptions {
        use_color,
        preview_lines: config.preview_lines,
    };

    Ok(AppContext {
        api,
        config,
        options,
    })
}

fn handle_session(ctx: AppContext) -> Result<()> {
    let form = CardForm::new(&ctx.config.default_category);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(ctx.api, form, ctx.options, stdin.lock(), stdout.lock());
    session.run()
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    if let Some(search) = search {
        ctx.api.set_search(search);
    }
    if let Some(category) = category {
        if !ctx.api.select_category_by_input(&category) {
            return Err(CardzError::Api(format!("Unknown category: {}", category)));
        }
    }

    let result = ctx.api.list_cards();
    if let Some(view) = result.view {
        print(&render_screen(&view, ctx.options))?;
    }
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let lines: Vec<String> = ctx
        .api
        .categories()
        .iter()
        .enumerate()
        .map(|(number, category)| format!("{} {}", number, category))
        .collect();
    print(&render_text_list(&lines, "No categories.", ctx.options))
}

fn handle_form_categories(ctx: &AppContext) -> Result<()> {
    let lines: Vec<String> = ctx
        .api
        .form_categories()
        .iter()
        .enumerate()
        .map(|(position, category)| format!("{}. {}", position + 1, category))
        .collect();
    print(&render_text_list(&lines, "No categories.", ctx.options))
}

fn print(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
