use clap::{Parser, Subcommand};
use solace_core::{RngSampler, SolaceConfig};
use solace_gateway::{spawn_cleanup, GatewayServer};
use solace_reasoning::ArbitrationEngine;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "solace", author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file; missing files fall back to defaults
    #[arg(short, long, default_value = "solace.toml", env = "SOLACE_CONFIG")]
    config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP gateway (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Talk to the engine from the terminal
    Chat {
        /// Session key to use; a fresh one is generated otherwise
        #[arg(long)]
        session: Option<String>,
        /// Seed the content sampler for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
        /// Print each turn as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json_logs);

    let config = SolaceConfig::load_or_default(&args.config);

    match args.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => serve(config, host, port).await,
        Command::Chat {
            session,
            seed,
            json,
        } => chat(config, session, seed, json).await,
    }
}

async fn serve(
    mut config: SolaceConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    info!("Initializing Solace...");
    let engine = Arc::new(ArbitrationEngine::from_config(&config));
    let _cleanup = spawn_cleanup(engine.store(), engine.clock(), &config.session);

    GatewayServer::new(engine, &config.server).serve().await
}

async fn chat(
    config: SolaceConfig,
    session: Option<String>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let mut engine = ArbitrationEngine::from_config(&config);
    if let Some(seed) = seed {
        engine = engine.with_sampler(Arc::new(RngSampler::seeded(seed)));
    }

    println!("Solace is listening. Type 'quit' to exit.");
    let mut session_id = session;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let outcome = engine.classify(session_id.as_deref(), trimmed).await;
        session_id = Some(outcome.session_id.clone());

        if json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("\nSolace: {}\n", outcome.reply);
        }
    }

    Ok(())
}
