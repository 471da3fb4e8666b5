//! Sniff - interactive live packet capture in the terminal
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod adapters;
pub mod app;
pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
