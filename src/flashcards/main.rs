use clap::Parser;
use directories::ProjectDirs;
use flashcards::api::{ConfigAction, FlashcardsApi, FlashcardsPaths};
use flashcards::commands;
use flashcards::config::FlashcardsConfig;
use flashcards::error::{FlashcardsError, Result};
use flashcards::session::{CardSession, SessionOptions};
use flashcards::store::sqlite::SqliteStore;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands, StackCommands};
use cli::print::{print_cards, print_config, print_messages, print_stacks};
use cli::terminal::TermConsole;

const HOME_ENV: &str = "FLASHCARDS_HOME";
const DB_ENV: &str = "FLASHCARDS_DB";
const LOG_ENV: &str = "FLASHCARDS_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct AppContext {
    paths: FlashcardsPaths,
    config: FlashcardsConfig,
}

impl AppContext {
    /// Opens the database. Only commands that touch cards or stacks call this,
    /// so `config` keeps working when the configured location is unusable.
    fn open_api(&self) -> Result<FlashcardsApi<SqliteStore>> {
        let store = SqliteStore::open(&self.paths.database)?;
        Ok(FlashcardsApi::new(store, self.paths.clone()))
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Study { stack }) => handle_study(&ctx, stack),
        Some(Commands::Add { stack, front, back }) => handle_add(&ctx, stack, front, back),
        Some(Commands::List { stack }) => handle_list(&ctx, stack),
        Some(Commands::Count { stack }) => handle_count(&ctx, stack),
        Some(Commands::Delete { stack, number }) => handle_delete(&ctx, stack, number),
        Some(Commands::Stack { action }) => handle_stack(&ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_study(&ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "flashcards", "flashcards")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FlashcardsError::Store("Could not determine a data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = FlashcardsConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        FlashcardsConfig::default()
    });

    let database = match (&cli.db, std::env::var_os(DB_ENV)) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => config.database_path(&data_dir),
    };
    debug!(data_dir = %data_dir.display(), database = %database.display(), "resolved paths");

    Ok(AppContext {
        paths: FlashcardsPaths { data_dir, database },
        config,
    })
}

fn handle_study(ctx: &AppContext, stack: Option<String>) -> Result<()> {
    let mut api = ctx.open_api()?;
    let options = SessionOptions::from(&ctx.config);
    let chosen = match stack {
        Some(name) => Some(api.find_stack(&name)?),
        None => None,
    };

    let mut console = TermConsole::new();
    let store = api.store_mut();
    let mut session = match chosen {
        Some(stack) => CardSession::for_stack(store, &mut console, options, stack)?,
        None => CardSession::start(store, &mut console, options)?,
    };
    session.run()
}

fn handle_add(ctx: &AppContext, stack: String, front: String, back: String) -> Result<()> {
    let result = ctx.open_api()?.add_card(&stack, front, back)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, stack: String) -> Result<()> {
    let result = ctx.open_api()?.list_cards(&stack)?;
    if !result.listed_cards.is_empty() {
        print_cards(&result.listed_cards, ctx.config.max_cell_width);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_count(ctx: &AppContext, stack: String) -> Result<()> {
    let result = ctx.open_api()?.count_cards(&stack)?;
    if let Some(count) = result.count {
        println!("{}", count);
    }
    Ok(())
}

fn handle_delete(ctx: &AppContext, stack: String, number: usize) -> Result<()> {
    let result = ctx.open_api()?.delete_card(&stack, number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stack(ctx: &AppContext, action: StackCommands) -> Result<()> {
    let mut api = ctx.open_api()?;
    let result = match action {
        StackCommands::List => {
            let result = api.list_stacks()?;
            print_stacks(&result.listed_stacks);
            result
        }
        StackCommands::Create { name } => api.create_stack(&name)?,
        StackCommands::Delete { name } => api.delete_stack(&name)?,
        StackCommands::Rename { name, new_name } => api.rename_stack(&name, &new_name)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.paths, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.open_api()?.init()?;
    print_messages(&result.messages);
    Ok(())
}
