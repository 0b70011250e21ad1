use std::env;
use std::process;

use solenopsis_metadata::settings::{DEFAULT_CATALOG, DEFAULT_LOG, Settings};
use tracing::{error, info};

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CATALOG.to_string());
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(DEFAULT_LOG);
            error!(%e, path, "could not read catalog");
            process::exit(1);
        }
    };
    init_tracing(&settings.log);
    match settings.seed_org() {
        Ok(org) => {
            info!(owner = %org.owner(), types = org.len(), "org ready");
            print!("{org}");
        }
        Err(e) => {
            error!(%e, path, "could not seed org");
            process::exit(1);
        }
    }
}
