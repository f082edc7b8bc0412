use clap::Parser;
use deposit_maturity_rs::args::Args;
use deposit_maturity_rs::{MaturityReport, Result, SafeTimeProvider, TimeSource};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = args.report_config();
    let time = SafeTimeProvider::new(TimeSource::System);

    MaturityReport::generate(&config, &time)?.print(&config)
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // use the requested level for the binary and the library only
        None => EnvFilter::new(format!(
            "{}={level},deposit_maturity_rs={level}",
            env!("CARGO_CRATE_NAME")
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
