//! Olabola Binary Entry Point

use clap::{Parser, Subcommand};
use olabola_core::{GridConfig, GridSynchronizer, PhysicalFileSystem, Vault};
use olabola_lsp::create_lsp_service;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tower_lsp::Server;

#[derive(Parser)]
#[command(author, version, about = "Keeps the movie grid of a markdown vault in sync", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the language server on stdin/stdout (default)
    Serve,
    /// Sync the grid of a vault once and exit
    Sync {
        /// Vault root folder
        vault: PathBuf,
        /// Config file to use instead of the vault's .olabola.yml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Sync { vault, config } => {
            if let Err(message) = sync_once(vault, config) {
                eprintln!("{}", message);
                process::exit(1);
            }
        }
    }
}

async fn serve() {
    eprintln!("Olabola LSP Server starting...");
    eprintln!("Listening on stdin/stdout...");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_lsp_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}

fn sync_once(root: PathBuf, config_path: Option<PathBuf>) -> Result<(), String> {
    let fs = Arc::new(PhysicalFileSystem);
    let config = match config_path {
        Some(path) => GridConfig::load_file(&*fs, &path),
        None => GridConfig::load(&*fs, &root),
    }
    .map_err(|e| e.to_string())?;

    let vault = Vault::new(root, fs);
    let outcome = GridSynchronizer::new(&vault, &config)
        .sync()
        .map_err(|e| format!("Grid sync failed: {}", e))?;

    println!("{}", outcome.message());
    Ok(())
}
