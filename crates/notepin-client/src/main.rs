//! notepin CLI
//!
//! `notepin list` prints the board; `notepin add --title .. --content ..`
//! pins a note and prints the updated board.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notepin_client::{render::render, Board, ClientConfig, HttpNotesApi};

#[derive(Debug, Parser)]
#[command(name = "notepin")]
#[command(about = "List and pin notes on a notepin API")]
struct Args {
    /// API base URL, e.g. http://localhost:4000
    #[arg(long, env = "NOTEPIN_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every note, newest first.
    List,
    /// Pin a new note.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let cfg = ClientConfig::new(args.api_url.as_deref());
    tracing::debug!(base_url = %cfg.base_url(), "using api");

    let mut board = Board::new(HttpNotesApi::new(cfg.base_url()));
    board.load().await;

    if let Command::Add { title, content } = args.command {
        let form = board.form_mut();
        form.title = title;
        form.content = content;
        board.submit().await;
    }

    print!("{}", render(&board));

    if board.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
