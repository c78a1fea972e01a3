//! Interactive command-line entry point for Adivina.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inquiry_core::{CsvTableProvider, GameIo, GameSession, Reply};
use word_bank::GameConfig;

/// Adivina - a twenty-questions style word guessing game.
#[derive(Debug, Parser)]
#[command(name = "adivina", version, about)]
struct Args {
    /// Root directory containing one dataset folder per category.
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the per-session question cap.
    #[arg(long)]
    max_questions: Option<usize>,

    /// Print the final result as JSON.
    #[arg(long)]
    json: bool,
}

/// Blocking console adapter. End of input ends the process cleanly.
struct ConsoleIo {
    stdin: io::StdinLock<'static>,
}

impl ConsoleIo {
    fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
        }
    }
}

impl GameIo for ConsoleIo {
    fn ask(&mut self, question: &str) -> Reply {
        print!("{} > ", question);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.stdin.read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                std::process::exit(0);
            }
            Ok(_) => Reply::parse(&line),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}

fn print_rules() {
    println!("===================================");
    println!("   Bienvenido a Adivina (CLI)");
    println!("===================================");
    println!("REGLAS DEL JUEGO:");
    println!("1. Piensa en una sola palabra; no valen compuestas.");
    println!("2. Los verbos van en infinitivo (correr, saltar).");
    println!("3. Responde con 'sí', 'no' o 'no sé'.");
    println!("4. Escribe 'salir' dentro de un flujo para terminar.");
    println!("===================================");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(data_root) = args.data_root {
        config.data_root = data_root;
    }
    if let Some(max_questions) = args.max_questions {
        config.max_questions = max_questions;
    }

    info!("adivina v{} starting", env!("CARGO_PKG_VERSION"));

    print_rules();

    let provider = CsvTableProvider::new(config.data_root.clone());
    let mut session = GameSession::new(provider, config);
    let mut io = ConsoleIo::new();
    let result = session.play(&mut io);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
