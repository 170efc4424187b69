use super::render::{
    print_messages, render_board, render_config, render_images, terminal_width,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use varman::api::{CmdResult, ConfigAction, VarmanApi};
use varman::error::{Result, VarmanError};
use varman::init::initialize;
use varman::model::{FilterId, Scope};
use varman::store::fs::FileSlots;

/// Environment variable holding a tracing filter directive (e.g. `varman=trace`).
const LOG_ENV: &str = "VARMAN_LOG";

struct AppContext {
    api: VarmanApi<FileSlots>,
    scope: Scope,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Show { json }) => handle_show(&mut ctx, json),
        Some(Commands::Add { label }) => handle_add(&mut ctx, label),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Column) => handle_column(&mut ctx),
        Some(Commands::Set {
            filter,
            variant,
            url,
            name,
        }) => handle_set(&mut ctx, filter, variant, url, name),
        Some(Commands::Pick {
            filter,
            variant,
            image,
        }) => handle_pick(&mut ctx, filter, variant, image),
        Some(Commands::Clear { filter, variant }) => handle_clear(&mut ctx, filter, variant),
        Some(Commands::Rename { id, label }) => handle_rename(&mut ctx, id, label),
        Some(Commands::Move { source, target }) => handle_move(&mut ctx, source, target),
        Some(Commands::Images { term }) => handle_images(&mut ctx, term),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Export) => handle_export(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_show(&mut ctx, false),
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let default = if verbose { "varman=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global)?;

    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
    })
}

fn handle_show(ctx: &mut AppContext, json: bool) -> Result<()> {
    if json {
        return handle_export(ctx);
    }
    let result = ctx.api.show()?;
    print_result(&result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, label: Vec<String>) -> Result<()> {
    let label = join_words(&label);
    let result = ctx.api.add_filter(label.as_deref())?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    let id = FilterId::new(id);
    if !yes && !confirm(&format!("Delete filter {}?", id))? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.delete_filter(&id)?;
    print_result(&result);
    Ok(())
}

fn handle_column(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.add_variant_column()?;
    print_result(&result);
    Ok(())
}

fn handle_set(
    ctx: &mut AppContext,
    filter: usize,
    variant: usize,
    url: String,
    name: Vec<String>,
) -> Result<()> {
    let (f, v) = slot_address(filter, variant)?;
    let result = ctx.api.set_variant_image(f, v, &url, &name.join(" "))?;
    print_result(&result);
    Ok(())
}

fn handle_pick(ctx: &mut AppContext, filter: usize, variant: usize, image: u32) -> Result<()> {
    let (f, v) = slot_address(filter, variant)?;
    let result = ctx.api.pick_image(f, v, image)?;
    print_result(&result);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, filter: usize, variant: usize) -> Result<()> {
    let (f, v) = slot_address(filter, variant)?;
    let result = ctx.api.clear_variant_image(f, v)?;
    print_result(&result);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, id: String, label: Vec<String>) -> Result<()> {
    let result = ctx
        .api
        .rename_filter(&FilterId::new(id), &label.join(" "))?;
    print_result(&result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, source: String, target: String) -> Result<()> {
    let result = ctx
        .api
        .reorder_filters(&FilterId::new(source), &FilterId::new(target))?;
    print_result(&result);
    Ok(())
}

fn handle_images(ctx: &mut AppContext, term: Vec<String>) -> Result<()> {
    let result = ctx.api.search_images(&term.join(" "))?;
    print!("{}", render_images(&result.images));
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Discard the saved board?")? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.reset()?;
    print_result(&result);
    Ok(())
}

fn handle_export(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.export()?;
    if let Some(json) = result.exported {
        println!("{}", json);
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(ctx.scope, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    if let Some(board) = &result.board {
        print!("{}", render_board(board, terminal_width()));
    }
}

/// Converts 1-based row/column positions into a 0-based slot address.
fn slot_address(filter: usize, variant: usize) -> Result<(usize, usize)> {
    let f = filter
        .checked_sub(1)
        .ok_or_else(|| VarmanError::Api("Filter positions start at 1".into()))?;
    let v = variant
        .checked_sub(1)
        .ok_or_else(|| VarmanError::Api("Variant positions start at 1".into()))?;
    Ok((f, v))
}

fn join_words(words: &[String]) -> Option<String> {
    let joined = words.join(" ");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Asks a yes/no question on the terminal. Without a terminal there is nobody
/// to ask, so the caller must pass `--yes`.
fn confirm(prompt: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(VarmanError::Api(format!(
            "{} Re-run with --yes to confirm.",
            prompt
        )));
    }
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
