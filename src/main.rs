use sniff::adapters::{PcapCaptureSource, PcapInterfaces};
use sniff::app::{Event, Session};
use sniff::cli::{help_text, parse_args, version_text, CliCommand};
use sniff::config::AppConfig;
use sniff::logging::init_logging;
use sniff::runtime::Runtime;
use sniff::startup::load_interfaces;
use sniff::terminal::{setup_panic_hook, TerminalManager};
use sniff::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    // Flags are handled before any initialization
    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_text());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", help_text());
            return Ok(());
        }
        CliCommand::RunTui => {}
    }

    color_eyre::install()?;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    if let Some(path) = init_logging(config.log_filter.as_deref())? {
        info!(log_file = %path.display(), "sniff {} starting", sniff::cli::VERSION);
    }

    // =========================================================
    // Interfaces - without them there is nothing to show
    // =========================================================

    let interfaces = match load_interfaces(&PcapInterfaces::new()) {
        Ok(interfaces) => interfaces,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    // =========================================================
    // TUI
    // =========================================================

    setup_panic_hook();

    let tokio_runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.size()?;

    let mut event_loop = Runtime::new(
        Session::new(interfaces),
        Arc::new(PcapCaptureSource::new()),
        config.capture,
    );
    event_loop.dispatch(Event::Resize {
        width: size.width,
        height: size.height,
    });

    let result = tokio_runtime.block_on(async {
        let terminal = term_manager.terminal();
        event_loop
            .run(EventStream::new(), |session| {
                terminal.draw(|frame| ui::render(frame, session))?;
                Ok(())
            })
            .await
    });

    term_manager.restore();
    info!("sniff exiting");
    result?;
    Ok(())
}
