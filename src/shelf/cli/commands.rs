use super::render::{print_messages, render_columns, render_config, render_listing, render_product};
use super::setup::{Cli, Commands, ListArgs};
use clap::Parser;
use console::Term;
use shelf::api::{ConfigAction, ListRequest};
use shelf::error::{Result, ShelfError};
use shelf::init::{initialize, ShelfContext};
use shelf::logging::{init_logging, LogConfig};
use shelf::store::LoadState;
use std::io::IsTerminal;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let log_config =
        LogConfig::from_verbosity(cli.verbose).with_ansi(std::io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd, cli.data.clone())?;

    match cli.command {
        Some(Commands::List(args)) => handle_list(&mut ctx, args),
        Some(Commands::Fav { ids }) => handle_fav(&mut ctx, ids),
        Some(Commands::Show { id }) => handle_show(&mut ctx, &id),
        Some(Commands::Columns) => handle_columns(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, ListArgs::default()),
    }
}

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Fetches the catalog once, showing a transient indicator on a terminal.
fn load_catalog(ctx: &mut ShelfContext) -> Result<()> {
    let term = Term::stderr();
    let interactive = term.is_term();
    // The indicator is cosmetic: a failed terminal write must not stop the load.
    if interactive {
        term.write_line("Loading products...").ok();
    }
    let state = ctx.api.load();
    if interactive {
        term.clear_last_lines(1).ok();
    }
    match state {
        LoadState::Failed(message) => Err(ShelfError::Fetch(message.clone())),
        _ => Ok(()),
    }
}

fn handle_list(ctx: &mut ShelfContext, args: ListArgs) -> Result<()> {
    load_catalog(ctx)?;
    let request = ListRequest {
        search: args.search,
        filters: args.filters,
        favorites_only: args.favorites,
        sort: args.sort,
        page: args.page,
        page_size: args.page_size,
        hide: args.hide,
        select: args.select,
    };
    let result = ctx.api.list(&request)?;
    if let Some(listing) = &result.listing {
        print!("{}", render_listing(listing, use_color()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut ShelfContext, ids: Vec<String>) -> Result<()> {
    load_catalog(ctx)?;
    let result = ctx.api.toggle_favorites(ids.as_slice())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut ShelfContext, id: &str) -> Result<()> {
    load_catalog(ctx)?;
    let result = ctx.api.show(id)?;
    let color = use_color();
    for product in &result.products {
        print!("{}", render_product(product, color));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_columns(ctx: &ShelfContext) -> Result<()> {
    let result = ctx.api.columns()?;
    print!("{}", render_columns(&result.columns, use_color()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &ShelfContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
