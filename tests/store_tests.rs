mod common;

use mockito::Matcher;
use rental_client::prelude::*;

#[test]
fn file_store_round_trips_the_pair() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileTokenStore::new(dir.path().join("tokens.json"));

    let pair = TokenPair::new("A1", "R1");
    store.save(&pair).expect("save should succeed");
    assert_eq!(store.load().expect("load should succeed"), pair);

    store.clear().expect("clear should succeed");
    assert!(store.load().expect("load after clear").is_empty());
}

#[test]
fn missing_file_loads_as_empty_pair() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileTokenStore::new(dir.path().join("never-written.json"));
    assert!(store.load().expect("load should succeed").is_empty());
}

#[test]
fn clearing_a_missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileTokenStore::new(dir.path().join("never-written.json"));
    store.clear().expect("clear should succeed");
    store.clear().expect("second clear should succeed");
}

#[test]
fn file_uses_fixed_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tokens.json");
    let store = FileTokenStore::new(&path);

    store.save(&TokenPair::new("A1", "R1")).expect("save");
    let raw = std::fs::read_to_string(&path).expect("read token file");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(json["access_token"], "A1");
    assert_eq!(json["refresh_token"], "R1");
}

#[test]
fn corrupt_file_surfaces_a_json_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, "not json").expect("write corrupt file");

    let store = FileTokenStore::new(&path);
    let err = store.load().err().expect("load should fail");
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn unwritable_store_does_not_break_the_session() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/auth/token/")
        .match_body(Matcher::Json(serde_json::json!({
            "username": "a",
            "password": "b",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access":"A1","refresh":"R1"}"#)
        .create_async()
        .await;

    let mut config = common::test_config(&server.url());
    config.storage.token_file = "/nonexistent-dir/rental/tokens.json".to_string();

    // Construction loads nothing and login cannot persist, but the session
    // keeps working in memory for the process lifetime.
    let client = RentalClient::new(config).expect("client construction");
    let access = client.auth().login().await.expect("login should succeed");
    assert_eq!(access, "A1");
    assert!(client.auth().is_authenticated().await);
}
