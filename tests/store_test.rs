use sponsorboard::models::{Event, EventDraft, EventStatus};
use sponsorboard::store::{FileStorage, RecordStore, Storage};
use std::sync::Arc;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStorage, RecordStore) {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path().join("board")).unwrap();
    let store = RecordStore::new(Arc::new(storage.clone()));
    (dir, storage, store)
}

fn events() -> Vec<Event> {
    vec![
        Event::new(
            1714521600000,
            EventDraft {
                title: "Fair".to_string(),
                date: "2024-05-01".to_string(),
                audience: "Students".to_string(),
                audience_size: "100".to_string(),
                ..Default::default()
            },
            None,
        ),
        Event::new(
            1714521600001,
            EventDraft {
                title: "Gala".to_string(),
                ..Default::default()
            },
            Some("data:image/png;base64,AA==".to_string()),
        ),
    ]
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, storage, store) = setup();

    assert_eq!(storage.get_item("events").unwrap(), None);
    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let (_dir, storage, store) = setup();
    std::fs::write(storage.dir().join("events.json"), "[{\"id\":").unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_save_load_round_trip() {
    let (_dir, _storage, store) = setup();

    store.save(&events()).unwrap();

    assert_eq!(store.load(), events());
}

#[test]
fn test_resaving_loaded_collection_is_a_no_op() {
    let (_dir, storage, store) = setup();
    store.save(&events()).unwrap();
    let before = storage.get_item("events").unwrap();

    store.save(&store.load()).unwrap();

    assert_eq!(storage.get_item("events").unwrap(), before);
}

#[test]
fn test_write_leaves_no_temp_file() {
    let (_dir, storage, store) = setup();
    store.save(&events()).unwrap();

    let names: Vec<String> = std::fs::read_dir(storage.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["events.json".to_string()]);
}

#[test]
fn test_reads_collections_written_by_other_clients() {
    let (_dir, storage, store) = setup();
    let raw = r#"[{"id":1714521600000,"title":"Fair","date":"2024-05-01","location":"Hall","audience":"Students","audienceSize":"100","sponsorship":"Booth","description":"Spring","status":"pending","imageUrl":"https://example.com/a.png"}]"#;
    storage.set_item("events", raw).unwrap();

    let loaded = store.load();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].status, EventStatus::Pending);
    assert_eq!(loaded[0].audience_size, "100");
    assert_eq!(loaded[0].image_url, "https://example.com/a.png");
}

#[test]
fn test_custom_key_is_isolated() {
    let (_dir, storage, store) = setup();
    let archive = RecordStore::with_key(Arc::new(storage.clone()), "archive");

    store.save(&events()).unwrap();

    assert!(archive.load().is_empty());
    assert!(storage.dir().join("events.json").exists());
}

#[test]
fn test_remove_missing_item_is_ok() {
    let (_dir, storage, _store) = setup();
    storage.remove_item("events").unwrap();
}

#[test]
fn test_overlapping_writers_never_expose_partial_collection() {
    let (_dir, storage, _store) = setup();
    let payload = |prefix: &str| {
        let events: Vec<Event> = (0..2000)
            .map(|id| {
                Event::new(
                    id,
                    EventDraft {
                        title: format!("{} {}", prefix, id),
                        description: "x".repeat(64),
                        ..Default::default()
                    },
                    None,
                )
            })
            .collect();
        serde_json::to_string(&events).unwrap()
    };
    let first = payload("Fair");
    let second = payload("Gala");

    let writers: Vec<_> = [first.clone(), second.clone()]
        .into_iter()
        .map(|raw| {
            let storage = storage.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    storage.set_item("events", &raw).unwrap();
                }
            })
        })
        .collect();

    let reader = {
        let storage = storage.clone();
        let (first, second) = (first.clone(), second.clone());
        std::thread::spawn(move || {
            let mut partial = 0;
            for _ in 0..300 {
                if let Some(raw) = storage.get_item("events").unwrap() {
                    if raw != first && raw != second {
                        partial += 1;
                    }
                }
            }
            partial
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    assert_eq!(reader.join().unwrap(), 0);

    let names: Vec<String> = std::fs::read_dir(storage.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["events.json".to_string()]);
}

#[test]
fn test_unreadable_record_does_not_hide_the_rest() {
    let (_dir, storage, store) = setup();
    let raw = r#"[
        {"id":1,"title":"Fair","date":"2024-05-01","location":"Hall","audience":"Students","audienceSize":"100","status":"Draft"},
        {"id":2,"title":"Gala","date":"2024-06-01","location":"Hall","audience":"Donors","audienceSize":"50","status":"archived"},
        {"id":3,"title":"Expo","date":"2024-07-01","audience":"Public","audienceSize":"900","status":"Matched"},
        {"id":4,"title":"Meetup","date":"2024-08-01","location":"Online","audience":"Developers","audienceSize":"40","status":"matched"}
    ]"#;
    storage.set_item("events", raw).unwrap();

    let ids: Vec<i64> = store.load().iter().map(|event| event.id).collect();

    assert_eq!(ids, vec![1, 4]);
}
