//! Subscriber setup shared by the command-line binaries.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "NOZOKI_LOG";
const DEFAULT_DIRECTIVES: &str = "nozoki_core=info,nozoki_tools=info";
const VERBOSE_DIRECTIVES: &str = "nozoki_core=debug,nozoki_tools=debug";

/// `NOZOKI_LOG` wins over `RUST_LOG`; with neither set the defaults apply.
pub fn filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_DIRECTIVES } else { DEFAULT_DIRECTIVES };
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
