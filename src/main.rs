use anyhow::{Context, Result};
use chatmine::config::{config_schema_json, Config};
use chatmine::{IntentResolver, Resolution, TranscriptStore};
use clap::{Parser, Subcommand};
use console::style;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const ABOUT: &str = "\
This is a simple chatbot that answers from a handful of fixed replies.
It greets you, says goodbye, and asks about the nouns and verbs in what you
type. Mention an age (\"I am 34 years old\") and it estimates a salary with a
pre-trained regression model.";

#[derive(Parser, Debug)]
#[command(name = "chatmine", version, about = "Text-mining chatbot")]
struct Cli {
    /// Config file (default: ~/.chatmine/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat (default)
    Chat,
    /// Resolve a single utterance
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the intent and reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recorded turns, newest first
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Delete the transcript instead of printing it
        #[arg(long)]
        clear: bool,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// What this chatbot does
    About,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config as TOML
    Show,
    /// Print the JSON schema of config.toml
    Schema,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_or_init_at(path)?,
        None => Config::load_or_init()?,
    };

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => chat(&config),
        Command::Ask { text, json } => ask(&config, &text.join(" "), json),
        Command::History { limit, clear } => history(&config, limit, clear),
        Command::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigAction::Schema => {
                println!("{}", config_schema_json()?);
                Ok(())
            }
        },
        Command::About => {
            println!("{ABOUT}");
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_resolver(config: &Config) -> Result<IntentResolver> {
    IntentResolver::from_config(config).context("Failed to initialize the chatbot engine")
}

fn open_transcript(config: &Config) -> Result<Option<TranscriptStore>> {
    if !config.transcript.enabled {
        return Ok(None);
    }
    TranscriptStore::open(&config.transcript).map(Some)
}

fn record(store: Option<&TranscriptStore>, utterance: &str, resolution: &Resolution) {
    if let Some(store) = store {
        if let Err(e) = store.append(utterance, resolution) {
            tracing::warn!("Failed to record turn: {e:#}");
        }
    }
}

fn ask(config: &Config, text: &str, json: bool) -> Result<()> {
    let resolver = build_resolver(config)?;
    let transcript = open_transcript(config)?;

    let resolution = resolver.resolve_detailed(text);
    record(transcript.as_ref(), text, &resolution);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution.reply);
    }
    Ok(())
}

fn chat(config: &Config) -> Result<()> {
    let resolver = build_resolver(config)?;
    let transcript = open_transcript(config)?;
    let mut editor =
        DefaultEditor::new().map_err(|e| anyhow::anyhow!("Failed to start line editor: {e}"))?;

    println!("{}", style("Text Mining Chatbot").bold().cyan());
    println!(
        "{}",
        style("Type a message, or /history, /about, /quit.").dim()
    );

    loop {
        let line = match editor.readline("You: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => anyhow::bail!("Failed to read input: {e}"),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(input) {
            tracing::debug!("Failed to add history entry: {e}");
        }

        match input {
            "/quit" | "/exit" => break,
            "/about" => {
                println!("{ABOUT}");
                continue;
            }
            "/history" => {
                print_history(transcript.as_ref(), 10)?;
                continue;
            }
            _ => {}
        }

        let resolution = resolver.resolve_detailed(input);
        record(transcript.as_ref(), input, &resolution);
        println!("🤖: {}", style(&resolution.reply).green());
    }
    Ok(())
}

fn history(config: &Config, limit: usize, clear: bool) -> Result<()> {
    let transcript = open_transcript(config)?;
    if clear {
        let removed = match &transcript {
            Some(store) => store.clear()?,
            None => 0,
        };
        println!("Removed {removed} turns.");
        return Ok(());
    }
    print_history(transcript.as_ref(), limit)
}

fn print_history(store: Option<&TranscriptStore>, limit: usize) -> Result<()> {
    let Some(store) = store else {
        println!("{}", style("Transcript is disabled in config.").yellow());
        return Ok(());
    };

    let entries = store.recent(limit)?;
    if entries.is_empty() {
        println!("{}", style("No questions asked yet.").dim());
        return Ok(());
    }
    for entry in entries {
        println!(
            "{} {} {}",
            style(entry.timestamp.format("%Y-%m-%d %H:%M:%S")).dim(),
            style(format!("[{}]", entry.intent)).cyan(),
            entry.utterance
        );
        println!("    🤖: {}", entry.reply);
    }
    Ok(())
}
