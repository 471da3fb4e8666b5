//! Command-line flags.
//!
//! `sniff` takes no arguments to run. `--version` and `--help` print and
//! exit before any initialization:
//!
//! ```ignore
//! use sniff::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => println!("{}", sniff::cli::version_text()),
//!     CliCommand::Help => println!("{}", sniff::cli::help_text()),
//!     CliCommand::RunTui => { /* start the UI */ }
//! }
//! ```

pub mod args;

pub use args::{parse_args, CliCommand};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("sniff {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "sniff {VERSION}
Interactive live packet capture in the terminal.

USAGE:
    sniff [--help | --version]

KEYS:
    up/k, down/j     move between interfaces and controls
    tab, shift+tab   next / previous field (also leaves the filter)
    enter, space     select interface, start/stop, clear
    shift+up/down    scroll one line
    pgup/pgdn        scroll one page
    home/end         scroll to top / bottom
    ?                toggle help
    q, ctrl+c        quit

ENVIRONMENT:
    SNIFF_SNAPLEN     bytes captured per packet (default 1600)
    SNIFF_PROMISC     promiscuous mode: true/false (default false)
    SNIFF_TIMEOUT_MS  capture read timeout in ms (default 250)
    SNIFF_LOG         tracing filter, e.g. sniff=debug; enables the log file

Capturing usually needs root or CAP_NET_RAW."
    )
}
