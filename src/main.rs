use anyhow::Result;
use clap::{Parser, ValueEnum};
use orgscan::redis::command::{DEFAULT_HOST, DEFAULT_LIMIT, DEFAULT_PORT, DEFAULT_PROGRAM};
use orgscan::{ExtractionEngine, SearchCommand, logging};
use std::io::{self, Write};

#[derive(Parser)]
#[command(
    name = "orgscan",
    version,
    about = "Extract active organization IDs from a RediSearch index via redis-cli",
    long_about = None
)]
struct Cli {
    /// Redis host (passed to redis-cli -h)
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Redis port (passed to redis-cli -p)
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Maximum number of documents to request
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Path to the redis-cli binary
    #[arg(long = "redis-cli", default_value = DEFAULT_PROGRAM)]
    redis_cli: String,

    /// Output format for the final result
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let command = SearchCommand {
        program: cli.redis_cli,
        host: cli.host,
        port: cli.port,
        limit: cli.limit,
        ..SearchCommand::default()
    };

    let engine = ExtractionEngine::new(command);
    let organizations = engine.run()?;

    match cli.format {
        // The diagnostics already narrate the result in text mode
        OutputFormat::Text => {}
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let output = serde_json::json!({
                "organizations": organizations,
                "count": organizations.len(),
                "command": engine.command(),
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(&mut handle)?;
        }
    }

    Ok(())
}
