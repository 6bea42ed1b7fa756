#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use twenty20::auth::{
    session::SESSION_KEY, types::Session, FileStore, KeyValueStore, SessionStore,
};

fn session() -> Session {
    Session {
        email: "x@y.com".to_string(),
        username: "x".to_string(),
    }
}

#[test]
fn session_survives_a_new_store_on_the_same_directory() {
    let dir = tempfile::tempdir().unwrap();

    SessionStore::new(Arc::new(FileStore::new(dir.path())))
        .set(&session())
        .unwrap();

    let reopened = SessionStore::new(Arc::new(FileStore::new(dir.path())));
    assert_eq!(reopened.get(), Some(session()));
}

#[test]
fn separate_directories_do_not_share_sessions() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    SessionStore::new(Arc::new(FileStore::new(first.path())))
        .set(&session())
        .unwrap();

    let other = SessionStore::new(Arc::new(FileStore::new(second.path())));
    assert_eq!(other.get(), None);
}

#[test]
fn missing_directory_is_created_on_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("profile").join("data");
    let store = FileStore::new(&nested);

    assert_eq!(store.get_item(SESSION_KEY).unwrap(), None);
    store.set_item(SESSION_KEY, "{}").unwrap();
    assert_eq!(store.get_item(SESSION_KEY).unwrap(), Some("{}".to_string()));
}

#[test]
fn clearing_removes_the_file_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    let sessions = SessionStore::new(store.clone());

    sessions.set(&session()).unwrap();
    assert!(store.get_item(SESSION_KEY).unwrap().is_some());

    sessions.clear().unwrap();
    sessions.clear().unwrap();
    assert_eq!(store.get_item(SESSION_KEY).unwrap(), None);
    assert_eq!(sessions.get(), None);
}

#[test]
fn corrupted_file_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    store.set_item(SESSION_KEY, "not json").unwrap();

    assert_eq!(SessionStore::new(store).get(), None);
}
