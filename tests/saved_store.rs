use fashion_mate::models::PrimaryOutfit;
use fashion_mate::store::{FileStore, KeyValueStore, SAVED_OUTFITS_KEY, SavedOutfits};

fn outfit(title: &str) -> PrimaryOutfit {
    PrimaryOutfit {
        title: title.to_string(),
        top: "Linen shirt".to_string(),
        bottom: "Pleated trousers".to_string(),
        footwear: "White sneakers".to_string(),
        accessories: vec!["Canvas tote".to_string()],
        reasoning: "Relaxed but intentional.".to_string(),
    }
}

#[test]
fn file_store_round_trips_the_collection() {
    let dir = tempfile::tempdir().unwrap();
    let saved = SavedOutfits::new(FileStore::new(dir.path()));

    assert!(!saved.is_saved("Gallery Chic"));
    assert!(saved.toggle_save(&outfit("Gallery Chic")));
    assert!(saved.is_saved("Gallery Chic"));

    // The collection is one JSON array under the namespace key.
    let path = dir.path().join(format!("{SAVED_OUTFITS_KEY}.json"));
    let raw = std::fs::read_to_string(path).unwrap();
    let parsed: Vec<PrimaryOutfit> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].title, "Gallery Chic");

    assert!(!saved.toggle_save(&outfit("Gallery Chic")));
    assert!(!saved.is_saved("Gallery Chic"));
}

#[test]
fn missing_key_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert!(store.get(SAVED_OUTFITS_KEY).unwrap().is_none());

    let saved = SavedOutfits::new(store);
    assert!(!saved.is_saved("anything"));
}

#[test]
fn corrupted_file_reads_as_empty_and_next_toggle_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set(SAVED_OUTFITS_KEY, "definitely not json").unwrap();

    let saved = SavedOutfits::new(store);
    assert!(!saved.is_saved("Gallery Chic"));

    assert!(saved.toggle_save(&outfit("Gallery Chic")));
    let collection = saved.saved();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].title, "Gallery Chic");
}

#[test]
fn distinct_titles_coexist() {
    let dir = tempfile::tempdir().unwrap();
    let saved = SavedOutfits::new(FileStore::new(dir.path()));

    saved.toggle_save(&outfit("Gallery Chic"));
    saved.toggle_save(&outfit("Interview Ready"));
    assert_eq!(saved.saved().len(), 2);

    saved.toggle_save(&outfit("Gallery Chic"));
    let remaining = saved.saved();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Interview Ready");
}
