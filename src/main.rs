//! rational-choice: compare two purchase alternatives from a scenario file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use rational_choice::adapters::explainer::{FallbackExplainer, TemplateExplainer};
use rational_choice::adapters::report::{render_themes, ComparisonReport};
use rational_choice::adapters::scenario::Scenario;
use rational_choice::application::{
    ApplySessionInputCommand, ApplySessionInputHandler, CompareAlternativesHandler,
    CompareAlternativesResult, SessionDefaults, StartSessionCommand, StartSessionHandler,
};
use rational_choice::config::{AppConfig, LogFormat, LoggingConfig, CONFIG_FILE_ENV};
use rational_choice::domain::choice::{find_theme, themes};

#[derive(Parser)]
#[command(name = "rational-choice")]
#[command(version, about = "Score two purchase alternatives against a budget", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Compare the alternatives in a scenario file
    rational-choice compare lunch.yaml

    # Machine-readable report
    rational-choice compare lunch.json --format json

    # List built-in themes
    rational-choice themes")]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, env = CONFIG_FILE_ENV)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario file and report the more rational alternative
    Compare {
        /// Scenario file (.yaml, .yml or .json)
        scenario: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Skip the explanation text
        #[arg(long)]
        no_explain: bool,
    },

    /// List built-in themes with their items and default criteria
    Themes {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    config.validate().context("validating configuration")?;
    init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::Compare {
            scenario,
            format,
            no_explain,
        } => {
            let scenario = Scenario::load(&scenario)
                .await
                .with_context(|| format!("loading scenario {}", scenario.display()))?;
            let explain = config.explainer.enabled && !no_explain;
            let result = run_comparison(&config, &scenario, explain).await?;
            match format {
                OutputFormat::Text => {
                    let report = ComparisonReport {
                        budget: result.budget,
                        evaluations: &result.evaluations,
                        comparison: &result.comparison,
                        explanation: result.explanation.as_ref(),
                        theme: scenario.theme.as_deref().and_then(find_theme),
                    };
                    print!("{}", report.render());
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Commands::Themes { format } => match format {
            OutputFormat::Text => print!("{}", render_themes(themes())),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(themes())?),
        },
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        logging.env_filter()
    };
    let (pretty, json) = match logging.format {
        LogFormat::Pretty => (
            Some(fmt::layer().with_target(false).with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(std::io::stderr))),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

async fn run_comparison(
    config: &AppConfig,
    scenario: &Scenario,
    explain: bool,
) -> Result<CompareAlternativesResult> {
    let inputs = scenario.to_inputs()?;
    let defaults = SessionDefaults::try_from(&config.scoring)?;

    let mut session = StartSessionHandler::new(defaults)
        .handle(StartSessionCommand::default())?
        .session;
    ApplySessionInputHandler::new()
        .handle(&mut session, ApplySessionInputCommand { inputs })
        .context("applying scenario")?;

    let mut handler = CompareAlternativesHandler::new();
    if explain {
        let explainer =
            FallbackExplainer::new(TemplateExplainer::new()).with_timeout(config.explainer.timeout());
        handler = handler.with_explainer(Arc::new(explainer));
    }
    let result = handler.handle(&session).await.context("scoring alternatives")?;

    session.end()?;
    Ok(result)
}
