use std::io;

use ceres_search::{parser::read_grid_text, process};
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init();

    let input = read_grid_text(io::stdin().lock())
        .into_diagnostic()
        .context("read grid from stdin")?;
    let totals = process(&input).context("process grid")?;
    println!("{}", totals);
    Ok(())
}

fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ceres_search=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr)
        .try_init();
}
