//! Crewline API Server
//!
//! Backend providing the Crewline team-collaboration HTTP API

use crewline_billing::provider::mock::MockBillingProvider;
use crewline_server::{ServerConfig, start_server};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            "crewline_server=debug,crewline_api=debug,crewline_core=debug,crewline_billing=debug",
        ))
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .pretty()
        .init();

    // Load config (for now use defaults)
    let config = ServerConfig::default();

    // TODO: replace the mock with a real payment provider integration
    start_server(config, Box::new(MockBillingProvider::new()))
        .await
        .into_diagnostic()?;

    Ok(())
}
