use chatsense_cli::args::CompletionsArgs;
use chatsense_cli::commands::Commands;
use chatsense_cli::context::ChatsenseCliContext;
use chatsense_cli::handlers::*;
use chatsense_cli::output::output_error_json;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "chatsense")]
#[command(about = "Sentiment, intent and entity analysis for chat messages", long_about = None)]
#[command(version = chatsense::VERSION)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    output: String,

    /// Use machine-readable output (alias for --output json)
    #[arg(long, global = true)]
    machine: bool,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();

    // Priority: machine flag > env var > cli arg
    let output_format = if cli_args.machine {
        "json".to_string()
    } else if let Ok(env_output) = std::env::var("CHATSENSE_OUTPUT") {
        env_output
    } else {
        cli_args.output.clone()
    };

    let is_quiet = cli_args.quiet
        || std::env::var("CHATSENSE_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    // Machine mode implies quiet so stdout stays clean JSON
    let log_level = if is_quiet || cli_args.machine {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli_args, &output_format).await {
        output_error_json(&e, &output_format);
        std::process::exit(1);
    }
}

async fn run(cli_args: Cli, output_format: &str) -> chatsense::Result<()> {
    match cli_args.command {
        Commands::Version => {
            println!("Chatsense CLI v{}", chatsense::VERSION);
            return Ok(());
        }
        Commands::Completions(CompletionsArgs { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(
                clap_complete::Shell::from(shell),
                &mut command,
                "chatsense",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        _ => {}
    }

    let ctx = ChatsenseCliContext::new(cli_args.config.as_deref())?;

    match cli_args.command {
        Commands::Sentiment(args) => handle_sentiment_command(args, &ctx, output_format),
        Commands::Classify(args) => handle_classify_command(args, &ctx, output_format).await,
        Commands::Entities(args) => handle_entities_command(args, &ctx, output_format),
        Commands::Conversation(args) => {
            handle_conversation_command(args, &ctx, output_format).await
        }
        Commands::Version | Commands::Completions(_) => Ok(()),
    }
}
