// src/main.rs

use log::{error, info};
use std::process::ExitCode;

use zetasdr_plot::config::RenderConfig;
use zetasdr_plot::crate_version;
use zetasdr_plot::manifest::{default_manifest, run_manifest};
use zetasdr_plot::plot_framework::FigureCounter;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("zetasdr_plot {}", crate_version());

    let config = RenderConfig::default();
    let mut counter = FigureCounter::new();
    let report = run_manifest(&default_manifest(), &config, &mut counter);

    match report.first_failure() {
        None => ExitCode::SUCCESS,
        Some(failure) => {
            error!(
                "First failure: '{}': {}",
                failure.output.display(),
                failure.error
            );
            ExitCode::FAILURE
        }
    }
}
