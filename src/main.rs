//! EventHub terminal application
//!
//! Main application entry point

use std::io;

use tracing::info;

use eventhub::{
    app::App,
    config::Settings,
    store::EventStore,
    utils::logging,
};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the session loop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", eventhub::info());

    // Seed the in-memory store
    let store = if settings.seed.enabled {
        EventStore::seeded()
    } else {
        EventStore::new()
    };
    info!(event_count = store.all_events().len(), "Event store ready");

    // Run the interactive session until quit or end of input
    let mut app = App::new(settings, store);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout)?;

    info!("EventHub session ended");
    Ok(())
}
