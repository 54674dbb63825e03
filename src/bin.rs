#![deny(warnings)]

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

mod cli;
use cli::App;

#[allow(unused_must_use)]
fn main() {
    // Keep this function as small as possible; everything else is reachable
    // from tests through `App`.

    init_tracing();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut app = App {
        arg_matches: cli::clap_app().get_matches(),
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    let r = app.run();

    app.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}

// Diagnostics go to stderr so they never mix with command output.
// Set RUST_LOG (e.g. `RUST_LOG=pit=debug`) to see object writes.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
