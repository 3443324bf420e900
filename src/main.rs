use clap::Parser;
use stagecard::assembler::build_report;
use stagecard::config::{OutputFormat, ReportConfig, DEFAULT_BASE_URL};
use stagecard::error::ScResult;
use stagecard::reports::{self, StdoutSink};
use stagecard::source::{load_match, DirSource, HttpSource};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Per-stage score card for one shooter", long_about = None)]
struct Cli {
    #[command(flatten)]
    report: ReportConfig,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Read results.json, match_scores.json and match_def.json from here instead
    #[arg(long)]
    from_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    if let Err(e) = run(cli).await {
        error!("❌ {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> ScResult<()> {
    let config = cli.report;
    config.validate()?;

    if config.shooter_name.is_empty() {
        warn!("⚠️  No --shooter_name given; stages will list names only.");
    }

    let docs = match &cli.from_dir {
        Some(dir) => {
            info!("📂 Reading match from {}", dir.display());
            load_match(&DirSource::new(dir), &config.match_id).await?
        }
        None => load_match(&HttpSource::new(&cli.base_url), &config.match_id).await?,
    };

    let report = build_report(&config, &docs)?;
    reports::render(&report, cli.format, &mut StdoutSink)
}
