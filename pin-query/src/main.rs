use std::io;

use clap::Parser;
use pin_query::{AnyResult, Args, run};
use tracing_subscriber::EnvFilter;

fn main() -> AnyResult<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    run(&args, &mut io::stdout().lock())
}
