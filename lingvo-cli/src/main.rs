//! lingvo CLI: runs the translation relay bot. Config from env and optional
//! CLI args.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lingvo_core::init_tracing;
use lingvo_telegram::{run_bot, BotConfig};

#[derive(Parser)]
#[command(name = "lingvo")]
#[command(about = "RU/EN translation relay bot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            init_tracing(&config.log_file)?;
            tracing::info!("starting lingvo bot");
            run_bot(config).await
        }
    }
}
