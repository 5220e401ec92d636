use anyhow::{Context, Result};
use blogstore::client::{print_titles_by_author, reader::AUTHOR_PROMPT};
use blogstore::{api, config::Config, db::init_db, HttpEntrySource, Repository};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::net::SocketAddr;
use std::sync::Arc;

/// A small blog: authors, topics and entries over SQLite.
#[derive(Parser)]
#[command(name = "blog")]
#[command(version)]
#[command(after_help = "ENVIRONMENT:\n    \
    PORT            Port to listen on (default 5000)\n    \
    BIND_ADDR       Address to bind (default 127.0.0.1)\n    \
    DATABASE_PATH   SQLite file, created on first use (default blog.sqlite)\n    \
    BLOG_API_URL    API base URL for 'blog read' (default http://127.0.0.1:5000)\n    \
    RUST_LOG        Log filter (default info)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON API and the HTML browser
    Serve,

    /// List the titles of one author's entries, fetched from a running server
    Read {
        /// Author to filter by; prompted for on stdin when omitted
        #[arg(short, long)]
        author: Option<String>,

        /// API base URL, overriding BLOG_API_URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Configuration error")?;

    match cli.command {
        Commands::Serve => serve(config).await,
        Commands::Read { author, api_url } => {
            read(api_url.unwrap_or(config.api_base_url), author).await
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let pool = init_db(&config.database_path)
        .await
        .with_context(|| format!("Failed to initialize database at {}", config.database_path))?;

    let repo = Arc::new(Repository::new(pool));
    let app = api::create_router(api::AppState::new(repo));

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn read(api_url: String, author: Option<String>) -> Result<()> {
    let author = match author {
        Some(author) => author,
        None => prompt_author()?,
    };

    let source = HttpEntrySource::new(api_url);
    let mut stdout = std::io::stdout().lock();
    print_titles_by_author(&source, &author, &mut stdout).await?;
    Ok(())
}

fn prompt_author() -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", AUTHOR_PROMPT)?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
