use timeline_core::{
    store_scene, AccountTextures, PostRecord, PostStore, StoreState, TimelineConfig,
};

fn post(id: u32) -> PostRecord {
    PostRecord {
        id,
        date: "2020-02-02".to_string(),
        work: String::new(),
        url: format!("https://x.com/acc/status/{id}"),
    }
}

#[test]
fn pending_and_failed_stores_expose_no_records() {
    let mut store = PostStore::pending();
    assert!(!store.is_ready());
    assert!(store.records().is_empty());

    store.mark_failed();
    assert_eq!(store.state(), &StoreState::Failed);
    assert!(store.records().is_empty());
}

#[test]
fn replace_swaps_whole_list_and_bumps_generation() {
    let mut store = PostStore::pending();
    let first = store.replace(vec![post(1), post(2)]);
    let second = store.replace(vec![post(3)]);

    assert!(second > first);
    assert!(store.is_ready());
    assert!(!store.contains(1));
    assert_eq!(store.get(3).map(|record| record.id), Some(3));
    assert_eq!(store.records().len(), 1);
}

#[test]
fn missing_work_field_deserializes_as_empty() {
    let record: PostRecord = serde_json::from_str(
        r#"{"id": 4, "date": "1999-12-31", "url": "https://x.com/a/status/4"}"#,
    )
    .expect("JSON hợp lệ");
    assert_eq!(record.work, "");
    assert_eq!(record.year(), "1999");
}

#[test]
fn scene_follows_store_lifecycle() {
    let textures = AccountTextures::new();
    let config = TimelineConfig::default();

    let mut store = PostStore::pending();
    assert_eq!(store_scene(&store, &textures, &config), None);

    store.mark_failed();
    let failed = store_scene(&store, &textures, &config).expect("kho lỗi vẫn vẽ trục");
    assert_eq!(failed.shapes.len(), 1);
    assert_eq!(failed.markers().count(), 0);

    store.replace(vec![post(1), post(2)]);
    let loaded = store_scene(&store, &textures, &config).expect("kho đã tải phải có cảnh");
    assert_eq!(loaded.markers().count(), 2);
}
