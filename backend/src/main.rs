use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tcga_insight::config::{Config, LoggingConfig};
use tcga_insight::models::Language;
use tcga_insight::services::llm::OpenAIClient;
use tcga_insight::services::{QueryService, reference_table};
use tcga_insight::{AppState, build_router};

#[derive(Parser)]
#[command(name = "tcga-insight", version, about = "TCGA cancer type lookup with generated overviews")]
struct Cli {
    /// Path to config.toml (default: conf/config.toml or ./config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server (default)
    Serve,
    /// Print the 33 TCGA projects
    List,
    /// Run one query and print the summary and overview
    Ask {
        /// Project code, e.g. TCGA-READ
        code: String,
        /// Output language: Chinese or English
        #[arg(long, short, default_value = "Chinese")]
        language: Language,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::List => {
            for entry in reference_table::all() {
                println!("{:<10} {:<66} {}", entry.code, entry.name_english, entry.name_chinese);
            }
            Ok(())
        },
        Command::Ask { code, language } => {
            let (config, report) = Config::load(cli.config.as_deref())?;
            let _guard = init_logging(&config.logging)?;
            report.log();

            let service = QueryService::new(Arc::new(OpenAIClient::new(&config.llm)?));
            let result = service.query(&code, language).await?;
            println!("{}\n\n{}", result.summary, result.narrative);
            Ok(())
        },
        Command::Serve => {
            let (config, report) = Config::load(cli.config.as_deref())?;
            let _guard = init_logging(&config.logging)?;
            report.log();
            serve(config).await
        },
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let client = OpenAIClient::new(&config.llm).context("Failed to build completion client")?;
    tracing::info!("Completion endpoint: {} (model {})", client.endpoint(), client.model());

    let state = Arc::new(AppState { query_service: QueryService::new(Arc::new(client)) });
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("TCGA Insight listening on http://{}", addr);
    tracing::info!("API docs at http://{}/api-docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// Console logs go to stderr; the optional file sink rolls daily.
fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match &config.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", file))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::daily(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}
