use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use methodo_core::model::MethodologyId;
use services::{AppServices, CatalogService, Clock, MethodologyService};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, Parser)]
#[command(name = "methodo", about = "Fiches méthodologiques PCSI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Catalog JSON file (defaults to the bundled sample catalog)
    #[arg(long, global = true, env = "METHODO_CATALOG")]
    catalog: Option<PathBuf>,

    /// Methodology to open on launch
    #[arg(long, global = true, env = "METHODO_METHODOLOGY")]
    methodology: Option<MethodologyId>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the desktop viewer (default)
    Ui,
    /// Validate the catalog and print one line per methodology
    Check,
}

#[derive(Debug, Error)]
enum LaunchError {
    #[error("methodology {0} is not in the catalog")]
    UnknownMethodology(MethodologyId),
}

struct DesktopApp {
    initial_methodology: Option<u64>,
    methodologies: Arc<MethodologyService>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        "Fiches méthodologiques"
    }

    fn initial_methodology(&self) -> Option<u64> {
        self.initial_methodology
    }

    fn methodologies(&self) -> Arc<MethodologyService> {
        Arc::clone(&self.methodologies)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "app=debug,services=debug,ui=debug"
    } else {
        "app=info,services=info,ui=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<CatalogService, services::CatalogError> {
    match path {
        Some(path) => CatalogService::from_path(path),
        None => CatalogService::bundled(),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_ref())?;
    let methodology = cli.methodology;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Check => {
            let services = AppServices::new(catalog, Clock::system())?;
            for methodology in services.methodologies().list_methodologies()? {
                println!(
                    "{:>4}  {}  ({})",
                    methodology.id(),
                    methodology.title(),
                    methodology.progress().label()
                );
            }
            Ok(())
        }
        Command::Ui => {
            if let Some(id) = methodology.filter(|id| catalog.get(*id).is_none()) {
                return Err(LaunchError::UnknownMethodology(id).into());
            }

            let services = AppServices::new(catalog, Clock::system())?;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                initial_methodology: methodology.map(|id| id.value()),
                methodologies: services.methodologies(),
            });
            let context = build_app_context(&app);
            tracing::info!(?methodology, "launching desktop viewer");

            // Some dev setups default to an always-on-top window; keep it a normal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Fiches méthodologiques")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // Binary glue: report once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
