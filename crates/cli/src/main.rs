//! Customer Account CLI - Look up customer accounts in the customer service.
//!
//! # Usage
//!
//! ```bash
//! # Fetch an account (extension flags from any sales org)
//! ca-cli account 0001234567
//!
//! # Fetch an account for a specific sales org
//! ca-cli account 0001234567 --sales-org 1010
//! ```
//!
//! # Commands
//!
//! - `account` - Fetch one customer account and print it as JSON
//!
//! # Logging
//!
//! `RUST_LOG` controls verbosity; `LOG_FORMAT=json` switches to JSON logs.
//! Logs go to stderr so stdout stays machine-readable. Setting `SENTRY_DSN`
//! (and optionally `SENTRY_ENVIRONMENT`) reports errors to Sentry.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "ca-cli")]
#[command(author, version, about = "Customer account lookup tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a customer account and print it as JSON
    Account {
        /// Customer account number
        account_number: String,

        /// Sales organization whose extension flags should be applied
        #[arg(short, long)]
        sales_org: Option<String>,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok()?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: std::env::var("SENTRY_ENVIRONMENT")
                .ok()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "customer_account_client=info,customer_account_cli=info".into());

    let is_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env before Sentry so SENTRY_DSN can live there too
    let _ = dotenvy::dotenv();

    let sentry_guard = init_sentry();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        // process::exit skips destructors; flush Sentry first
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Account {
            account_number,
            sales_org,
        } => commands::account::show(&account_number, sales_org.as_deref()).await?,
    }
    Ok(())
}
