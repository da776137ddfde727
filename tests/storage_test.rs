use sponow::{
    management::CredentialStore,
    storage::{FileStore, KeyValueStore, MemoryStore},
};

#[tokio::test]
async fn test_memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("a").await.unwrap(), None);

    store.set("a", "1").await.unwrap();
    store.set("b", "2").await.unwrap();
    store.set("c", "3").await.unwrap();
    store.remove(&["a", "b", "missing"]).await.unwrap();

    assert_eq!(store.get("a").await.unwrap(), None);
    assert_eq!(store.get("b").await.unwrap(), None);
    assert_eq!(store.get("c").await.unwrap().as_deref(), Some("3"));
}

#[tokio::test]
async fn test_file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested/storage.json"));

    assert_eq!(store.get("anything").await.unwrap(), None);
    store.remove(&["anything"]).await.unwrap();
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/storage.json");

    let store = FileStore::new(&path);
    store.set("spotify-token", r#"{"a":1}"#).await.unwrap();
    store.set("other", "value").await.unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(
        reopened.get("spotify-token").await.unwrap().as_deref(),
        Some(r#"{"a":1}"#)
    );

    reopened.remove(&["spotify-token", "other"]).await.unwrap();
    assert_eq!(store.get("spotify-token").await.unwrap(), None);
    assert_eq!(store.get("other").await.unwrap(), None);
    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("storage.json")]);
}

#[tokio::test]
async fn test_file_store_corrupt_document_reads_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = FileStore::new(&path);
    assert_eq!(store.get("spotify-credentials").await.unwrap(), None);

    store.set("spotify-credentials", "{}").await.unwrap();
    assert_eq!(
        store.get("spotify-credentials").await.unwrap().as_deref(),
        Some("{}")
    );
}

#[tokio::test]
async fn test_credential_store_over_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let store = CredentialStore::new(FileStore::new(&path));
    store.save_credentials("abc", "xyz").await.unwrap();

    let reopened = CredentialStore::new(FileStore::new(&path));
    let credentials = reopened.get_credentials().await.unwrap();
    assert_eq!(credentials.client_id, "abc");
    assert_eq!(credentials.client_secret, "xyz");

    reopened.clear_credentials().await.unwrap();
    assert!(store.get_credentials().await.is_none());
}

#[tokio::test]
async fn test_file_store_non_utf8_document_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let store = CredentialStore::new(FileStore::new(&path));
    assert!(store.get_credentials().await.is_none());

    store.save_credentials("abc", "xyz").await.unwrap();
    assert_eq!(store.get_credentials().await.unwrap().client_id, "abc");

    let raw = std::fs::read(&path).unwrap();
    assert!(serde_json::from_slice::<serde_json::Value>(&raw).is_ok());

    store.clear_credentials().await.unwrap();
    assert!(store.get_credentials().await.is_none());
}

#[tokio::test]
async fn test_file_store_clear_on_non_utf8_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let store = CredentialStore::new(FileStore::new(&path));
    store.clear_credentials().await.unwrap();
    assert!(store.get_token().await.is_none());
}

#[test]
fn test_file_store_default_location_is_in_data_dir() {
    let store = FileStore::default_location();
    assert_eq!(store.path(), &sponow::config::data_dir().join("storage.json"));
}
