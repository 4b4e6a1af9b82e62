//! `bjson` — edit a JSON document by path.
//!
//! Usage:
//!   bjson [--input FILE] [--output FILE] [--pretty] <COMMAND> [--path POINTER] [VALUE]
//!
//! The document is read from stdin unless `--input` is given, and written
//! to stdout unless `--output` is given. `BJSON_PRETTY=true` turns on
//! tab-indented output. Logging goes to stderr and follows `RUST_LOG`.

use bjson::cli::{self, Cli};
use clap::Parser;

fn main() {
    cli::init_tracing();
    if let Err(err) = cli::run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
