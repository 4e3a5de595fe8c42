//! `roster` - CLI for the staff directory
//!
//! This binary loads the directory once and then either prints a listing,
//! prints one detail view, or runs the interactive browse session.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use roster::cli::{
    interactive, Cli, Command, ConfigCommand, ListCommand, OutputFormat, ShowCommand,
};
use roster::render::{render_detail, render_gallery};
use roster::{init_logging, AppState, Config, DirectoryLoader, HttpSource, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Validation reports a broken file instead of failing on it
    if let Some(Command::Config(ConfigCommand::Validate { file })) = cli.command {
        return handle_validate(file.or(cli.config));
    }

    // Load configuration
    let mut config = Config::load_from(cli.config.clone())?;
    if let Some(seed) = cli.seed.clone() {
        config.source.seed = Some(seed);
    }

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => handle_browse(&config).await,
        Command::List(list_cmd) => handle_list(&config, &list_cmd).await,
        Command::Show(show_cmd) => handle_show(&config, &show_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn load_state(loader: &DirectoryLoader<HttpSource>) -> anyhow::Result<AppState> {
    let directory = loader
        .load()
        .await
        .with_context(|| format!("failed to load directory from {}", loader.source().url()))?;
    Ok(AppState::new(directory))
}

async fn handle_browse(config: &Config) -> anyhow::Result<()> {
    let loader = DirectoryLoader::from_config(config)?;
    let session = Session::new(load_state(&loader).await?);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    interactive::run(&loader, session, stdin, &mut stdout).await?;
    writeln!(stdout)?;
    Ok(())
}

async fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let state = load_state(&DirectoryLoader::from_config(config)?).await?;
    let query = cmd.query.as_deref().unwrap_or("");
    let cards = state.render_filtered(query);

    match cmd.format {
        OutputFormat::Plain => {
            print!(
                "{}",
                render_gallery(query, &cards, state.directory().len())
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
    }
    Ok(())
}

async fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let state = load_state(&DirectoryLoader::from_config(config)?).await?;
    let view = state.open(cmd.index)?.view(state.directory())?;

    match cmd.format {
        OutputFormat::Plain => print!("{}", render_detail(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Source]");
                println!("  Endpoint:           {}", config.source.endpoint);
                println!("  Batch size:         {}", config.source.batch_size);
                println!(
                    "  Nationality:        {}",
                    if config.source.nationality.is_empty() {
                        "any"
                    } else {
                        &config.source.nationality
                    }
                );
                println!(
                    "  Seed:               {}",
                    config.source.seed.as_deref().unwrap_or("(random)")
                );
                println!("  Timeout (secs):     {}", config.source.timeout_secs);
                println!();
                println!("[Display]");
                println!("  Birthday format:    {}", config.display.birthday_format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => return handle_validate(file),
    }
    Ok(())
}

fn handle_validate(file: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    match Config::load_from(Some(path)) {
        Ok(_) => println!("Configuration is valid."),
        Err(e) => println!("Configuration error: {e}"),
    }
    Ok(())
}
