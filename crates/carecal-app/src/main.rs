use carecal_app::args::Invocation;
use carecal_app::input::load_events;
use carecal_app::render::render_view;
use carecal_calendar::CalendarStore;
use carecal_core::config::load_config;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let invocation = Invocation::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let events = load_events(&invocation.events_path)?;

    let mut store =
        CalendarStore::from_config(invocation.subject_id(), &config.calendar, invocation.date)?;
    store.replace_events(&events);

    for action in invocation.actions {
        store.dispatch(action);
    }

    let view = store.view()?;
    print!("{}", render_view(&view, store.locale())?);

    Ok(())
}
