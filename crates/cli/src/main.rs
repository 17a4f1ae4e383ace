use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventdesk_app::config::AppConfig;
use eventdesk_app::session::PanelSession;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let session = PanelSession::open(config)?;

    let stats = session.dashboard();
    tracing::info!(
        total_registered = stats.total_registered,
        active_events = stats.active_events,
        checkins_done = stats.checkins_done,
        attendance_rate_pct = stats.attendance_rate_pct,
        "panel ready"
    );

    for event in session.events.events() {
        tracing::info!(
            id = %event.id,
            date = %event.date,
            venue = %event.venue,
            status = event.status.label(),
            "event: {}",
            event.name
        );
    }

    if let Some(event) = session.events.events().first() {
        let editor = session.open_rule_editor(&event.id)?;
        match editor.diagnostic() {
            Some(diag) => tracing::warn!(event = %event.name, "{}", diag.message()),
            None => tracing::info!(
                event = %event.name,
                rules = editor.rules().len(),
                "check-in rule set is valid"
            ),
        }
    }

    session.persist()?;
    Ok(())
}
