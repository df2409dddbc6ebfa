//! Interactive interview-prep tracker.

use std::io;

use anyhow::Context;
use prep_tracker::{
    config::Config,
    logging::init_logging,
    persist::csv::CsvCatalogSink,
    runtime::session::Session,
    shell::Shell,
};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("load configuration")?;
    init_logging(&config.log).context("initialise logging")?;
    info!(data_file = %config.data_file.display(), "starting");

    let sink = CsvCatalogSink::new(&config.data_file);
    let session = match Session::load(Box::new(sink.clone())) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "could not load catalog");
            eprintln!(
                "Could not load {}: {err}. Starting with an empty catalog.",
                sink.path().display()
            );
            Session::new(Some(Box::new(sink)))
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(session, stdin.lock(), io::stdout().lock());
    shell.run().context("console i/o")?;
    Ok(())
}
