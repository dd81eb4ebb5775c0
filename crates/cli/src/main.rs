use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chain_core::Config;
use chain_llm::{Generator, GroqProvider};
use chain_pipeline::{qa_template, TextPipeline};

#[derive(Parser)]
#[command(name = "chainserve")]
#[command(about = "Serve prompt chains over HTTP or run them from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service exposing the registered chains
    Serve {
        /// Port to listen on (overrides config and environment)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Ask the question-answering chain once and print the answer
    Ask {
        /// The question to ask
        question: String,
        /// Model override for this invocation
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            tracing::info!("starting chainserve on port {}", config.port);
            web_service::server::run(config).await
        }
        Commands::Ask { question, model } => {
            let provider =
                GroqProvider::from_config(&config).context("failed to build provider")?;
            let generator: Arc<dyn Generator> = Arc::new(provider);

            let mut pipeline = TextPipeline::new(qa_template(), generator);
            if let Some(model) = model.or(config.model) {
                pipeline = pipeline.with_model(model);
            }

            let input = HashMap::from([("input".to_string(), question)]);
            let answer = pipeline.invoke(&input).await?;
            println!("{answer}");
            Ok(())
        }
    }
}
