use super::*;

#[test]
fn memory_session_save_load_and_clear() {
    let store = MemorySession::new();
    assert_eq!(store.load("k"), None);

    store.save("k", "v1");
    store.save("k", "v2");
    assert_eq!(store.load("k").as_deref(), Some("v2"));

    store.clear("k");
    assert!(!store.contains("k"));
    store.clear("k");
}

#[test]
fn load_json_returns_none_for_malformed_value() {
    let store = MemorySession::new();
    store.save("flag", "{not json");
    assert_eq!(load_json::<bool>(&store, "flag"), None);
}

#[test]
fn load_json_returns_none_for_mismatched_type() {
    let store = MemorySession::new();
    store.save("flag", "\"yes\"");
    assert_eq!(load_json::<bool>(&store, "flag"), None);
}

#[test]
fn save_json_writes_compact_json() {
    let store = MemorySession::new();
    save_json(&store, "ids", &vec![1, 2, 3]);
    assert_eq!(store.load("ids").as_deref(), Some("[1,2,3]"));
    assert_eq!(load_json::<Vec<u32>>(&store, "ids"), Some(vec![1, 2, 3]));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_is_inert_outside_the_browser() {
    let store = BrowserSession;
    store.save("k", "v");
    assert_eq!(store.load("k"), None);
    store.clear("k");
}
