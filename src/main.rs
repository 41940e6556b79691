use sponsorboard::config::BoardConfig;
use sponsorboard::engine::Poller;
use sponsorboard::repositories::EventRepository;
use sponsorboard::services::FixedConfirm;
use sponsorboard::store::{FileStorage, RecordStore};
use sponsorboard::views::{CardAction, OrganizerView, SponsorView};

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sponsorboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sponsorboard v{}", env!("CARGO_PKG_VERSION"));

    let config = BoardConfig::from_env();
    let storage = Arc::new(FileStorage::open(&config.data_dir)?);
    let store = RecordStore::with_key(storage, config.storage_key.clone());
    let poller = Poller::new(config.poll_interval);

    // The monitor never deletes, so the prompt always declines.
    let organizer = OrganizerView::new(EventRepository::open(store.clone()), FixedConfirm(false));
    let sponsor = SponsorView::new(EventRepository::open(store));

    let mut organizer_updates = organizer.subscribe();
    let mut sponsor_updates = sponsor.subscribe();

    let (organizer_tx, organizer_commands) = mpsc::channel(32);
    let (sponsor_tx, sponsor_commands) = mpsc::channel(32);

    let organizer_task = tokio::spawn(poller.run(organizer, organizer_commands));
    let sponsor_task = tokio::spawn(poller.run(sponsor, sponsor_commands));

    info!(
        "Watching '{}' in {:?} every {:?}",
        config.storage_key, config.data_dir, config.poll_interval
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            Ok(()) = organizer_updates.changed() => {
                let snapshot = organizer_updates.borrow_and_update().clone();
                info!("Organizer table redrawn with {} row(s)", snapshot.rows.len());
                for row in &snapshot.rows {
                    info!("  [{}] {} on {} ({} attendees)", row.status, row.title, row.date, row.audience_size);
                }
            }
            Ok(()) = sponsor_updates.changed() => {
                let snapshot = sponsor_updates.borrow_and_update().clone();
                let open = snapshot
                    .cards
                    .iter()
                    .filter(|card| card.action == CardAction::Sponsor)
                    .count();
                info!(
                    "Sponsor grid redrawn with {} card(s), {} open for sponsorship",
                    snapshot.cards.len(),
                    open
                );
            }
            _ = &mut shutdown => {
                info!("Shutting down");
                break;
            }
        }
    }

    drop(organizer_tx);
    drop(sponsor_tx);
    organizer_task.await?;
    sponsor_task.await?;

    Ok(())
}
