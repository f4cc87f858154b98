use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use url::Url;

use devmetrics::render::{self, OutputFormat};
use devmetrics::{AnalysisState, Config, DashboardSession, GitHubClient, ProfileAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "devmetrics")]
#[command(version = "0.1.0")]
#[command(about = "Analytics dashboard for a GitHub profile")]
struct Args {
    /// GitHub username to analyze
    username: Option<String>,

    /// Dashboard address; its `user` query parameter is analyzed when no username is given
    #[arg(long)]
    location: Option<String>,

    /// Output format (text, markdown, json, html)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// API base URL, overrides DEVMETRICS_API_BASE
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("devmetrics=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let format: OutputFormat = args.format.parse()?;

    let mut config = Config::from_env()?;
    if let Some(ref api_base) = args.api_base {
        config.api_base = api_base.trim_end_matches('/').to_string();
    }

    let location = Url::parse(args.location.as_deref().unwrap_or(&config.base_url))?;

    let github = GitHubClient::new(&config)?;
    let mut session = DashboardSession::with_location(ProfileAnalyzer::new(github), location);

    let handle = match args.username.as_deref().map(str::trim) {
        Some(handle) if !handle.is_empty() => handle.to_string(),
        _ => match session.initial_handle() {
            Some(handle) => handle,
            None => {
                tracing::info!("No username given, nothing to analyze");
                return Ok(());
            }
        },
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Analyzing {}...", handle));
    spinner.enable_steady_tick(Duration::from_millis(100));

    session.submit(&handle).await;
    spinner.finish_and_clear();

    match session.state() {
        AnalysisState::Dashboard { view, .. } => {
            let output = render::render(view, format)?;
            if let Some(ref path) = args.output {
                std::fs::write(path, &output)?;
                tracing::info!("Output written to: {}", path);
            } else {
                println!("{}", output);
            }

            if let Some(location) = session.location() {
                tracing::info!("Shareable link: {}", location);
            }
            Ok(())
        }
        AnalysisState::Error { message, .. } => anyhow::bail!("{}", message),
        state => anyhow::bail!("Analysis did not finish (state: {})", state.label()),
    }
}
