use aifindr_client::config::Settings;
use aifindr_client::{
    CardView, PlainView, Query, SearchClient, SearchController, Theme, ThemeStore, View,
    EXAMPLE_QUERY,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

/// Terminal client for the AIFindr people search service
#[derive(Parser)]
#[command(name = "aifindr", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Search service base URL (overrides configuration)
    #[arg(long)]
    base_url: Option<String>,

    /// Render plain text instead of styled cards
    #[arg(long, default_value_t = false)]
    plain: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a single query and print the matches.
    Search {
        /// Free-text description of who you are looking for
        query: String,
    },
    /// Interactive prompt; submit queries repeatedly.
    Repl,
    /// Probe the search service health endpoint.
    Health,
    /// Show or change the persisted theme preference.
    Theme {
        /// New theme, "light" or "dark"; prints the current one when omitted
        theme: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut settings = Settings::load().context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url.clone() {
        settings.service.base_url = base_url;
    }

    tracing::debug!("Search service: {}", settings.service.base_url);

    let client = SearchClient::new(
        settings.service.base_url.clone(),
        settings.service.timeout_secs,
    )
    .context("Failed to create search client")?;

    match cli.command {
        Command::Search { query } => {
            let store = load_theme_store(&settings)?;
            let view = make_view(cli.plain, store.current());
            let controller = SearchController::new(Arc::new(client));
            run_query(&controller, view.as_ref(), &query).await?;
        }
        Command::Repl => run_repl(cli.plain, &settings, client).await?,
        Command::Health => {
            let health = client
                .health()
                .await
                .context("Search service is unreachable")?;
            println!(
                "{} (checked at {})",
                health.status,
                chrono::Utc::now().to_rfc3339()
            );
        }
        Command::Theme { theme } => {
            let mut store = load_theme_store(&settings)?;
            match theme.as_deref() {
                None => println!("{}", store.current()),
                Some(value) => {
                    let theme = match value.to_lowercase().as_str() {
                        "light" => Theme::Light,
                        "dark" => Theme::Dark,
                        other => {
                            anyhow::bail!("Unknown theme {:?}; expected light or dark", other)
                        }
                    };
                    store
                        .set(theme)
                        .context("Failed to save theme preference")?;
                    println!("Theme set to {}", theme);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn load_theme_store(settings: &Settings) -> anyhow::Result<ThemeStore> {
    ThemeStore::load(&settings.ui.theme_file, settings.ui.default_theme)
        .context("Failed to load theme preference")
}

fn make_view(plain: bool, theme: Theme) -> Box<dyn View> {
    if plain {
        Box::new(PlainView)
    } else {
        Box::new(CardView::new(theme))
    }
}

/// Submit one query and render each state change until it settles.
async fn run_query(
    controller: &SearchController,
    view: &dyn View,
    input: &str,
) -> anyhow::Result<()> {
    if Query::parse(input).is_none() {
        // Blank input never produces a request; nothing to render.
        return Ok(());
    }

    let mut rx = controller.subscribe();

    let ctl = controller.clone();
    let input = input.to_string();
    let submission = tokio::spawn(async move { ctl.submit(&input).await });

    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        print!("{}", view.render(&state));
        std::io::stdout().flush().ok();
        if !state.is_loading() {
            break;
        }
    }

    submission.await?;
    Ok(())
}

async fn run_repl(plain: bool, settings: &Settings, client: SearchClient) -> anyhow::Result<()> {
    let mut theme_store = load_theme_store(settings)?;
    let controller = SearchController::new(Arc::new(client));

    println!("AIFindr - find people who match your interests and vibe");
    println!("Try: {}", EXAMPLE_QUERY);
    println!("Commands: :theme toggles the theme, :q quits");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("query> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            ":q" | ":quit" => break,
            ":theme" => {
                match theme_store.toggle() {
                    Ok(theme) => println!("Theme set to {}", theme),
                    Err(e) => tracing::warn!("Failed to save theme preference: {}", e),
                }
                continue;
            }
            _ => {}
        }

        let view = make_view(plain, theme_store.current());
        run_query(&controller, view.as_ref(), &line).await?;
    }

    Ok(())
}
