mod summarize;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docsum_common::{logger, AppConfig};
use docsum_server::Selection;
use std::path::PathBuf;

use crate::summarize::SummarizeOptions;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "docsum")]
#[command(about = "docsum - 한/영 혼합 텍스트를 한국어 정리 리포트/기획서 워드 파일로", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate once from a file or stdin and write the DOCX
    Summarize {
        /// Input text file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Select the "proposal draft" option
        #[arg(long)]
        proposal: bool,

        /// Deselect the "content summary report" option
        #[arg(long)]
        no_report: bool,

        /// Directory for the generated document
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env before any config read so CLI overrides win
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Summarize {
            input,
            proposal,
            no_report,
            out_dir,
        }) => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;

            let options = SummarizeOptions {
                input,
                selection: Selection {
                    content_summary: !no_report,
                    proposal_draft: proposal,
                },
                out_dir,
            };
            summarize::run(&config, options).await?;
        }
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = &host {
                std::env::set_var("SERVER_HOST", host);
            }
            if let Some(port) = port {
                std::env::set_var("SERVER_PORT", port.to_string());
            }

            serve().await?;
        }
        None => serve().await?,
    }

    Ok(())
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("docsum starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {}", config.llm_model);
    tracing::info!("  Endpoint: {}", config.openai_base_url);

    println!("Server listening on http://{}", config.server_bind_address());

    docsum_server::start_server(config).await?;
    Ok(())
}
