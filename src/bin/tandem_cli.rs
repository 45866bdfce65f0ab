//! Tandem CLI - unified search over the shared tracking library
//!
//! # Examples
//!
//! ```bash
//! # Search everything at once
//! tandem search "blade runner"
//!
//! # Filters and comparators
//! tandem search "@movie status:finished rating>=4"
//!
//! # See how a query is parsed
//! tandem explain '"star wars" @note -spoiler'
//!
//! # Show configuration
//! tandem show-config
//! ```

use clap::Parser;
use tandem::cli::{output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing (quiet by default; RUST_LOG overrides)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tandem=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.message());
        let code = if e.is_bad_request() { 2 } else { 1 };
        std::process::exit(code);
    }
}
