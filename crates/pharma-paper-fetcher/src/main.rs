//! Pharma Paper Fetcher - Entry Point
//!
//! Flag-driven when given arguments, interactive when run bare.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pharma_paper_fetcher::config::api;
use pharma_paper_fetcher::export::default_output_filename;
use pharma_paper_fetcher::formatters::{format_run_header, format_summary};
use pharma_paper_fetcher::{Config, FetchError, FetchRequest, PaperFetcher, Source};

/// Exit status after Ctrl-C (128 + SIGINT).
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "pharma-paper-fetcher")]
#[command(about = "Fetch research papers with pharmaceutical/biotech affiliations")]
#[command(version)]
struct Cli {
    /// Search query for papers
    query: String,

    /// Maximum number of results per source
    #[arg(long, default_value_t = api::DEFAULT_MAX_RESULTS, value_parser = parse_max_results)]
    max_results: usize,

    /// Data sources to search
    #[arg(long, num_args = 1.., default_values = ["pubmed", "arxiv"])]
    sources: Vec<SourceArg>,

    /// Output CSV filename (default: generated from the query and time)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum SourceArg {
    /// NCBI PubMed
    Pubmed,
    /// arXiv preprints
    Arxiv,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Pubmed => Self::PubMed,
            SourceArg::Arxiv => Self::Arxiv,
        }
    }
}

fn parse_max_results(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn generated_output(query: &str) -> PathBuf {
    PathBuf::from(default_output_filename(query, &chrono::Local::now()))
}

async fn prompt(input: &mut Lines<BufReader<Stdin>>, message: &str) -> anyhow::Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(message.as_bytes()).await?;
    stdout.flush().await?;

    let line = input.next_line().await?.unwrap_or_default();
    Ok(line.trim().to_string())
}

/// Ask for the query and output file; `None` when the query is empty.
async fn interactive_request() -> anyhow::Result<Option<FetchRequest>> {
    let rule = "=".repeat(60);
    println!("{rule}\nResearch Paper Fetcher - Interactive Mode\n{rule}");

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let query = prompt(&mut input, "\nEnter your search query: ").await?;
    if query.is_empty() {
        println!("Error: Search query cannot be empty");
        return Ok(None);
    }

    let default_output = generated_output(&query);
    let message = format!("Enter output filename (default: {}): ", default_output.display());
    let answer = prompt(&mut input, &message).await?;
    let output = if answer.is_empty() { default_output } else { PathBuf::from(answer) };

    let request = FetchRequest::new(query).with_output(output);
    Ok(Some(request))
}

async fn run(config: &Config, request: FetchRequest) -> anyhow::Result<ExitCode> {
    let fetcher = PaperFetcher::new(config)?;

    let cancel = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    match fetcher.fetch_and_filter_or_cancel(&request, cancel).await {
        Ok(papers) => {
            let output = request.output.as_deref();
            println!("{}", format_summary(&request.query, &papers, output));
            Ok(ExitCode::SUCCESS)
        }
        Err(FetchError::Cancelled) => {
            println!("\nOperation cancelled by user");
            Ok(ExitCode::from(EXIT_CANCELLED))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error during execution");
            Err(anyhow::anyhow!(e.to_user_message()))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    if std::env::args_os().len() <= 1 {
        init_tracing("info", false);

        let Some(request) = interactive_request().await? else {
            return Ok(ExitCode::FAILURE);
        };
        if let Some(output) = &request.output {
            println!(
                "{}",
                format_run_header(
                    &request.query,
                    request.max_results,
                    &request.sources,
                    output
                )
            );
        }
        return run(&config, request).await;
    }

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting pharma paper fetcher");

    let sources: Vec<Source> = cli.sources.iter().copied().map(Source::from).collect();
    let output = cli.output.unwrap_or_else(|| generated_output(&cli.query));

    let request = FetchRequest::new(cli.query)
        .with_max_results(cli.max_results)
        .with_sources(sources)
        .with_output(output);

    run(&config, request).await
}
