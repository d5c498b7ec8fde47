use history::{
    HistoryStore, InMemoryStore, JsonFileStore, StoreConfig, StoreFactory, StoreKind,
};
use records::{MeasurementGroup, ReadingRecord};

fn batch(group: MeasurementGroup, values: [f64; 6], at: u64) -> Vec<ReadingRecord> {
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| ReadingRecord {
            technician_initials: "KL".to_string(),
            sample_id: "S-9".to_string(),
            group,
            position: idx as u8 + 1,
            hardness_value: *value,
            recorded_at: at,
        })
        .collect()
}

#[test]
fn json_store_creates_file_and_appends() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("readings.json");
    let mut store = JsonFileStore::new(&path);

    store.ensure_ready().expect("ensure ready");
    assert!(path.exists());
    assert!(store
        .fetch_history(MeasurementGroup::Bottom)
        .expect("fetch")
        .is_empty());

    let written = store
        .append(&batch(MeasurementGroup::Bottom, [301.0, 302.0, 303.0, 304.0, 305.0, 306.0], 1))
        .expect("append");
    assert_eq!(written, 6);
    store
        .append(&batch(MeasurementGroup::Top, [330.0; 6], 2))
        .expect("append");

    let reopened = JsonFileStore::new(&path);
    assert_eq!(
        reopened.fetch_history(MeasurementGroup::Bottom).expect("fetch"),
        vec![301.0, 302.0, 303.0, 304.0, 305.0, 306.0]
    );
    assert_eq!(
        reopened.fetch_history(MeasurementGroup::Top).expect("fetch").len(),
        6
    );
}

#[test]
fn json_store_ensure_ready_keeps_existing_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("readings.json");
    let mut store = JsonFileStore::new(&path);
    store.ensure_ready().expect("ensure ready");
    store
        .append(&batch(MeasurementGroup::Top, [310.0; 6], 1))
        .expect("append");

    store.ensure_ready().expect("ensure ready again");
    assert_eq!(
        store.fetch_history(MeasurementGroup::Top).expect("fetch").len(),
        6
    );
}

#[test]
fn json_store_fetch_fails_when_file_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.fetch_history(MeasurementGroup::Bottom).is_err());
}

#[test]
fn memory_store_keeps_groups_apart() {
    let mut store = InMemoryStore::new();
    store
        .append(&batch(MeasurementGroup::Bottom, [300.0; 6], 1))
        .expect("append");
    assert_eq!(
        store.fetch_history(MeasurementGroup::Bottom).expect("fetch").len(),
        6
    );
    assert!(store
        .fetch_history(MeasurementGroup::Top)
        .expect("fetch")
        .is_empty());
}

#[test]
fn memory_store_seeded_out_of_order_returns_oldest_first() {
    let mut records = batch(MeasurementGroup::Top, [340.0; 6], 20);
    records.extend(batch(MeasurementGroup::Top, [310.0; 6], 10));
    let store = InMemoryStore::with_records(records);

    let series = store.fetch_history(MeasurementGroup::Top).expect("fetch");
    assert_eq!(series[..6], [310.0; 6]);
    assert_eq!(series[6..], [340.0; 6]);
}

#[test]
fn factory_builds_requested_store() {
    let config = StoreConfig {
        kind: StoreKind::Memory,
        path: "unused.json".into(),
    };
    let mut store = StoreFactory::create(&config);
    store.ensure_ready().expect("ensure ready");
    assert_eq!(
        store
            .append(&batch(MeasurementGroup::Top, [320.0; 6], 1))
            .expect("append"),
        6
    );
    assert_eq!(store.fetch_history(MeasurementGroup::Top).expect("fetch").len(), 6);
}
