use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use readme_deps::config::{CONFIG_FILE_NAME, Config, MergePolicy};
use readme_deps::document::Document;
use readme_deps::markdown::read_tables;
use readme_deps::prompt::{AssumeYes, Confirm, StdinPrompt};
use readme_deps::registries::npm::NpmRegistry;
use readme_deps::sync::{SyncAction, SyncOptions, SyncOutcome, Synchronizer};

#[derive(Parser)]
#[command(name = "readme-deps")]
#[command(about = "Keep the dependency tables in README.md in sync with package.json", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Default)]
struct SyncArgs {
    /// Markdown document holding the dependency tables
    #[arg(short, long)]
    readme: Option<PathBuf>,

    /// package.json to read dependencies from
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Append the tables without asking when the document has none
    #[arg(short, long)]
    yes: bool,

    /// Keep rows already in the document instead of refreshing them
    #[arg(long)]
    reuse_existing: bool,

    /// Print the new document instead of writing it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Update the dependency tables (default behavior)
    Sync(SyncArgs),
    /// Print the dependencies currently listed in the document
    Show {
        /// Markdown document holding the dependency tables
        #[arg(short, long)]
        readme: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Commands::Show { readme }) => run_show(readme.unwrap_or(config.readme)).await,
        Some(Commands::Sync(args)) => run_sync(config, args).await,
        None => run_sync(config, SyncArgs::default()).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_sync(mut config: Config, args: SyncArgs) -> anyhow::Result<ExitCode> {
    if let Some(readme) = args.readme {
        config.readme = readme;
    }
    if let Some(manifest) = args.manifest {
        config.manifest = manifest;
    }
    if args.reuse_existing {
        config.sync.merge_policy = MergePolicy::PreferExisting;
    }

    let mut options = SyncOptions::from(&config);
    options.dry_run = args.dry_run;

    let registry = NpmRegistry::from_config(&config.registry)?;
    let prompt: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinPrompt::stdin())
    };

    let outcome = Synchronizer::new(registry, prompt, options).run().await?;

    match outcome {
        SyncOutcome::Declined => {
            println!("No dependency tables were found, and adding them was declined.");
            println!("Exiting...");
        }
        SyncOutcome::NoDependencies => {
            println!("No dependencies found in {}.", config.manifest.display());
            println!("Exiting...");
        }
        SyncOutcome::Updated(report) if !report.written => {
            print!("{}", report.content);
        }
        SyncOutcome::Updated(report) => {
            match report.action {
                SyncAction::Appended => {
                    println!("Appended dependency section to {}.", config.readme.display())
                }
                SyncAction::Overwritten => {
                    println!("Overwrote dependency tables in {}.", config.readme.display())
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_show(readme: PathBuf) -> anyhow::Result<ExitCode> {
    let document = Document::load(readme).await?;
    let mut records: Vec<_> = read_tables(document.lines()).into_values().collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));

    if records.is_empty() {
        println!("No dependency tables found in {}", document.path().display());
        return Ok(ExitCode::SUCCESS);
    }

    for record in &records {
        let license = if record.license.is_empty() {
            "unknown license"
        } else {
            record.license.as_str()
        };
        println!("{} ({}): {}", record.name, license, record.description);
    }

    Ok(ExitCode::SUCCESS)
}
