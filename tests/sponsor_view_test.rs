use sponsorboard::models::{EventDraft, EventStatus};
use sponsorboard::repositories::EventRepository;
use sponsorboard::store::{MemoryStorage, RecordStore, Storage};
use sponsorboard::views::{CardAction, SponsorView};
use std::sync::Arc;

fn repository(storage: &MemoryStorage) -> EventRepository {
    EventRepository::open(RecordStore::new(Arc::new(storage.clone())))
}

fn seed(storage: &MemoryStorage, titles: &[&str]) -> Vec<i64> {
    let mut repo = repository(storage);
    titles
        .iter()
        .map(|title| {
            repo.create(
                EventDraft {
                    title: title.to_string(),
                    date: "2024-05-01".to_string(),
                    location: "Main Hall".to_string(),
                    audience: "Students".to_string(),
                    audience_size: "100".to_string(),
                    sponsorship: "Booth".to_string(),
                    description: format!("{} description", title),
                },
                None,
            )
            .unwrap()
            .id
        })
        .collect()
}

#[test]
fn test_cards_follow_collection_order() {
    let storage = MemoryStorage::new();
    let ids = seed(&storage, &["Fair", "Gala", "Summit"]);

    let view = SponsorView::new(repository(&storage));
    let cards = view.snapshot().cards;

    assert_eq!(cards.iter().map(|card| card.id).collect::<Vec<_>>(), ids);
    assert!(cards.iter().all(|card| card.action == CardAction::Sponsor));
}

#[test]
fn test_sponsor_marks_matched_and_persists() {
    let storage = MemoryStorage::new();
    let ids = seed(&storage, &["Fair", "Gala"]);
    let mut view = SponsorView::new(repository(&storage));

    assert!(view.sponsor(ids[1]).unwrap());

    let cards = view.snapshot().cards;
    assert_eq!(cards[0].action, CardAction::Sponsor);
    assert_eq!(cards[1].action, CardAction::Sponsored);

    let persisted = repository(&storage);
    assert_eq!(persisted.find(ids[1]).unwrap().status, EventStatus::Matched);
    assert_eq!(persisted.find(ids[0]).unwrap().status, EventStatus::Draft);
}

#[test]
fn test_sponsor_twice_changes_nothing_more() {
    let storage = MemoryStorage::new();
    let ids = seed(&storage, &["Fair"]);
    let mut view = SponsorView::new(repository(&storage));

    view.sponsor(ids[0]).unwrap();
    let after_once = storage.get_item("events").unwrap();
    view.sponsor(ids[0]).unwrap();

    assert_eq!(storage.get_item("events").unwrap(), after_once);
}

#[test]
fn test_sponsor_unknown_id_is_ignored() {
    let storage = MemoryStorage::new();
    seed(&storage, &["Fair"]);
    let mut view = SponsorView::new(repository(&storage));
    let revision = view.snapshot().revision;

    assert!(!view.sponsor(999).unwrap());
    assert_eq!(view.snapshot().revision, revision);
}

#[test]
fn test_details_are_read_only() {
    let storage = MemoryStorage::new();
    let ids = seed(&storage, &["Fair"]);
    let mut view = SponsorView::new(repository(&storage));
    let before = storage.get_item("events").unwrap();

    assert!(view.view_details(ids[0]));
    let details = view.details().unwrap().clone();
    assert_eq!(details.title, "Fair");
    assert_eq!(details.description, "Fair description");
    assert_eq!(details.audience_line(), "Students (100 people)");
    assert_eq!(view.snapshot().details, Some(details));

    view.close_details();

    assert!(view.details().is_none());
    assert!(view.snapshot().details.is_none());
    assert_eq!(storage.get_item("events").unwrap(), before);
}

#[test]
fn test_details_for_unknown_id_stay_closed() {
    let storage = MemoryStorage::new();
    let mut view = SponsorView::new(repository(&storage));

    assert!(!view.view_details(1));
    assert!(view.details().is_none());
}
