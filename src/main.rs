use std::io;
use std::process::ExitCode;

use clap::Parser;
use edls::config::{Cli, ListOptions};
use edls::core::telemetry::logging::init_logging;
use edls::models::StyleTable;
use edls::services::classify::Classifier;
use edls::services::fs::listing::OsDirectory;
use edls::services::pipeline;
use edls::services::render::Renderer;

static STYLES: StyleTable = StyleTable::standard();

fn main() -> ExitCode {
    init_logging();

    let options = ListOptions::from(Cli::parse());
    tracing::debug!(?options, "starting listing");

    let classifier = Classifier::for_host();
    let renderer = Renderer::local(&STYLES);
    let mut stdout = io::stdout().lock();

    match pipeline::run(&OsDirectory, &classifier, &renderer, &options, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("edls: {err}");
            ExitCode::FAILURE
        }
    }
}
