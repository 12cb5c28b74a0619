mod common;

use mockito::Matcher;
use rental_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn authenticated_request_carries_bearer_header() {
    let mut server = mockito::Server::new_async().await;
    let (client, _store) = common::create_authenticated_client(&server.url(), "A1", Some("R1"));

    let mock = server
        .mock("GET", "/main/users/me/")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"username":"alice"}"#)
        .create_async()
        .await;

    let user = client.current_user().await.expect("request should succeed");
    assert_eq!(user.expect("authenticated").username, "alice");
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthenticated_request_has_no_bearer_header() {
    let mut server = mockito::Server::new_async().await;
    let (client, _store) = common::create_test_client(&server.url());

    let mock = server
        .mock("GET", "/main/cars/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let cars: Vec<Car> = client.get("/main/cars/").await.expect("request should succeed");
    assert!(cars.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn expired_access_token_is_refreshed_and_request_retried() {
    let mut server = mockito::Server::new_async().await;
    let (client, store) = common::create_authenticated_client(&server.url(), "A1", Some("R1"));

    let stale = server
        .mock("GET", "/main/users/me/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Token expired"}"#)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/token/refresh/")
        .match_body(Matcher::Json(json!({"refresh": "R1"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access":"A2"}"#)
        .expect(1)
        .create_async()
        .await;

    let retried = server
        .mock("GET", "/main/users/me/")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"username":"alice"}"#)
        .expect(1)
        .create_async()
        .await;

    let user = client.current_user().await.expect("retried call succeeds");
    assert_eq!(user.expect("authenticated").id, 1);

    stale.assert_async().await;
    refresh.assert_async().await;
    retried.assert_async().await;

    // New access token, refresh token unchanged, both persisted.
    let tokens = client.auth().tokens().await;
    assert_eq!(tokens.access.as_deref(), Some("A2"));
    assert_eq!(tokens.refresh.as_deref(), Some("R1"));
    assert_eq!(store.load().unwrap(), tokens);
}

#[tokio::test]
async fn second_401_does_not_trigger_second_refresh() {
    let mut server = mockito::Server::new_async().await;
    let (client, _store) = common::create_authenticated_client(&server.url(), "A1", Some("R1"));

    let first = server
        .mock("GET", "/main/cars/7/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/token/refresh/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access":"A2"}"#)
        .expect(1)
        .create_async()
        .await;

    let second = server
        .mock("GET", "/main/cars/7/")
        .match_header("authorization", "Bearer A2")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Still unauthorized"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client.get::<Car>("/main/cars/7/").await.err().expect("should fail");
    match err {
        AppError::Http { status, detail } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(detail, "Still unauthorized");
        }
        other => panic!("Unexpected error: {other:?}"),
    }

    first.assert_async().await;
    refresh.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn refresh_failure_surfaces_as_unauthorized_and_keeps_tokens() {
    let mut server = mockito::Server::new_async().await;
    let (client, _store) = common::create_authenticated_client(&server.url(), "A1", Some("R1"));

    let request = server
        .mock("GET", "/main/bookings/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/token/refresh/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Token is blacklisted"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client
        .get::<Vec<Booking>>("/main/bookings/")
        .await
        .err()
        .expect("should fail");
    assert!(matches!(err, AppError::Unauthorized));

    request.assert_async().await;
    refresh.assert_async().await;

    // Tokens are not cleared; invalidation is the caller's decision.
    let tokens = client.auth().tokens().await;
    assert_eq!(tokens.access.as_deref(), Some("A1"));
    assert_eq!(tokens.refresh.as_deref(), Some("R1"));
}

#[tokio::test]
async fn delete_with_204_returns_success_marker() {
    let mut server = mockito::Server::new_async().await;
    let (client, _store) = common::create_authenticated_client(&server.url(), "A1", Some("R1"));

    let mock = server
        .mock("DELETE", "/main/cars/9/")
        .match_header("authorization", "Bearer A1")
        .with_status(204)
        .create_async()
        .await;

    client.delete("/main/cars/9/").await.expect("delete should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_carries_server_detail() {
    let mut server = mockito::Server::new_async().await;
    let (client, _store) = common::create_authenticated_client(&server.url(), "A1", Some("R1"));

    server
        .mock("GET", "/main/cars/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Invalid filter"}"#)
        .create_async()
        .await;

    let err = client.get::<Vec<Car>>("/main/cars/").await.err().expect("should fail");
    match err {
        AppError::Http { status, detail } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(detail, "Invalid filter");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn http_error_without_detail_gets_generic_message() {
    let mut server = mockito::Server::new_async().await;
    let (client, _store) = common::create_authenticated_client(&server.url(), "A1", Some("R1"));

    server
        .mock("GET", "/main/cars/")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = client.get::<Vec<Car>>("/main/cars/").await.err().expect("should fail");
    match err {
        AppError::Http { status, detail } => {
            assert_eq!(status.as_u16(), 500);
            assert!(detail.contains("500"));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}
