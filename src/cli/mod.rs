// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::net::SocketAddr;
use tracing::info;

use crate::api::start_server;
use crate::config::AppConfig;
use crate::intake::Intake;
use crate::pipeline::{PipelineOutcome, RagPipeline};
use crate::render::render_terminal;

/// Search the web and answer from the result snippets
#[derive(Parser, Debug)]
#[command(name = "websearch-rag")]
#[command(version)]
#[command(about = "Search-then-summarize: web search snippets grounded into an LLM answer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer one query in the terminal
    Ask(AskArgs),

    /// Serve the query page over HTTP
    Serve(ServeArgs),
}

/// Arguments for the ask command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Query text; one line is read from stdin when omitted
    #[arg(long)]
    pub query: Option<String>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "RAG_BIND_ADDR", default_value = "127.0.0.1:8501")]
    pub bind: SocketAddr,
}

/// Execute CLI command
pub async fn execute(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Commands::Ask(args) => ask(args, &config).await,
        Commands::Serve(args) => serve(args, &config).await,
    }
}

async fn ask(args: AskArgs, config: &AppConfig) -> Result<()> {
    let intake = match args.query {
        Some(query) => Intake::from_query(query),
        None => {
            let mut stdin = io::stdin().lock();
            Intake::read_line(&mut stdin)?
        }
    };

    let query = match intake {
        Intake::Halt => return Ok(()),
        Intake::Run(query) => query,
    };

    let pipeline = RagPipeline::from_config(config)?;
    if let PipelineOutcome::Answered(result) = pipeline.run(&query).await? {
        println!("{}", render_terminal(&result));
    }
    Ok(())
}

async fn serve(args: ServeArgs, config: &AppConfig) -> Result<()> {
    let pipeline = RagPipeline::from_config(config)?;
    info!(
        "Using search host {} and model {}",
        config.search.base_url, config.synthesis.model
    );
    start_server(pipeline, args.bind).await
}
