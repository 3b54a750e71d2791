use std::path::PathBuf;

mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use roster_core::{load_settings, load_store, RecordStore};
use tracing_subscriber::EnvFilter;

use crate::ui::{DashboardApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Employee roster dashboard")]
struct Args {
    /// Settings file; defaults to ./roster.toml or the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON seed file overriding the configured one.
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        settings.seed_path = Some(seed);
    }

    let directives = settings.log_directives();
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (store, startup_error) = match load_store(settings.seed_path.as_deref()) {
        Ok(store) => (store, None),
        Err(err) => {
            tracing::error!("seed load failed: {err}");
            (RecordStore::default(), Some(err.to_string()))
        }
    };

    let startup = StartupConfig::from(&settings);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.window_title.clone())
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    tracing::info!(employees = store.len(), "starting dashboard");
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::bootstrap(store, startup, startup_error)))),
    )
    .map_err(|err| anyhow::anyhow!("dashboard exited with error: {err}"))
}
