use anyhow::Context;
use clap::{Parser, ValueEnum};
use news_agent::{
    render_markdown, AgentConfig, Audience, GenerationRequest, HttpFeedClient, NewsAgent,
    NewsAggregator, Voice, WritingLength, WritingMode,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, Level};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

/// Turn live news feeds into a newsletter or blog draft.
#[derive(Debug, Parser)]
#[command(name = "news-agent", version)]
struct Cli {
    /// Theme to focus on; empty means "whatever is fresh".
    #[arg(long, default_value = "")]
    topic: String,

    #[arg(long, default_value = "newsletter")]
    mode: WritingMode,

    #[arg(long, default_value = "analytical")]
    voice: Voice,

    #[arg(long, default_value = "general")]
    audience: Audience,

    #[arg(long, default_value = "standard")]
    length: WritingLength,

    /// Leave citations out of the result.
    #[arg(long)]
    no_sources: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// TOML config file. Falls back to $NEWS_AGENT_CONFIG.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: Level,
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let request = GenerationRequest {
        topic: cli.topic,
        mode: cli.mode,
        voice: cli.voice,
        audience: cli.audience,
        length: cli.length,
        include_sources: !cli.no_sources,
    }
    .validate()?;

    let config = AgentConfig::load(cli.config.as_deref()).await?;
    let client = HttpFeedClient::new(config.fetch.clone()).context("Failed to build HTTP client")?;
    let agent = NewsAgent::new(NewsAggregator::new(config.feeds, Arc::new(client)));

    let result = agent.generate(&request).await?;
    let output = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Markdown => render_markdown(&result),
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting news agent");

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Generation failed: {:#}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
