//! REDLEV CLI
//!
//! Command-line interface for the site renderer:
//! - Render the site against the page catalogue and print the result
//! - Show the site clock
//! - Print a default config or a starter content document

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use redlev::page::{self, MemoryPage, Node, TargetProvider, UiTarget};
use redlev::{ClockService, Config, ContentDocument, LoggingConfig, Site};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "redlev")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the REDLEV site from data/content.json")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the content document and print the rendered page
    Render {
        /// Page location (URL or directory); overrides the config
        #[arg(short, long)]
        base: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Output::Html)]
        output: Output,
    },

    /// Show the current time on the site clock
    Clock {
        /// Keep ticking until interrupted
        #[arg(short, long)]
        watch: bool,
    },

    /// Print the default configuration file
    Config,

    /// Print a starter content.json for editors
    Template,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Output {
    Html,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Render { base, output } => render(config, base, output).await,
        Commands::Clock { watch } => clock(&config, watch).await,
        Commands::Config => {
            print!("{}", redlev::config::generate_default_config());
            Ok(())
        }
        Commands::Template => {
            println!("{}", serde_json::to_string_pretty(&ContentDocument::template())?);
            Ok(())
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("redlev={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn render(mut config: Config, base: Option<String>, output: Output) -> anyhow::Result<()> {
    if let Some(base) = base {
        config.content.base = base;
    }

    let site = Site::from_config(&config)?;
    tracing::info!("Rendering site from {}", site.location());

    let page = page::shared(MemoryPage::catalogue());
    let mut boot = site.boot(&page).await;
    boot.clock.cancel();

    let mut page = page.lock().await;
    // Stamp the clock so the snapshot does not depend on task scheduling
    site.clock().tick(&mut *page, Utc::now());

    match output {
        Output::Html => println!("{}", page.to_html()),
        Output::Json => println!("{}", serde_json::to_string_pretty(&*page)?),
    }

    boot.content
        .with_context(|| format!("content could not be loaded from {}", site.location()))
}

async fn clock(config: &Config, watch: bool) -> anyhow::Result<()> {
    let service = ClockService::from_config(&config.clock);

    if !watch {
        println!("{}", service.display(Utc::now()));
        return Ok(());
    }

    let console = page::shared(ConsolePage {
        target: config.clock.target.clone(),
    });
    let _handle = service.start(console).await;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;
    tracing::info!("Clock stopped");
    Ok(())
}

/// A page whose only target is the clock, printed to stdout
struct ConsolePage {
    target: String,
}

struct ConsoleLine;

impl TargetProvider for ConsolePage {
    fn target(&mut self, id: &str) -> Option<Box<dyn UiTarget + '_>> {
        (id == self.target).then(|| Box::new(ConsoleLine) as Box<dyn UiTarget + '_>)
    }
}

impl UiTarget for ConsoleLine {
    fn set_text(&mut self, text: &str) {
        println!("{}", text);
    }

    fn set_attr(&mut self, _name: &str, _value: &str) {}

    fn set_hidden(&mut self, _hidden: bool) {}

    fn replace_children(&mut self, _children: Vec<Node>) {}

    fn toggle_class(&mut self, _class: &str) -> bool {
        false
    }
}
