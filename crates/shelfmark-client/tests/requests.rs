use std::sync::Arc;

use mockito::{Matcher, Server};
use serde_json::json;
use shelfmark_client::{
    ApiClient, ApiError, ApiRequest, ClientConfig, MemorySessionStore, Method, SessionEvent,
    SessionStore, StatusCode,
};
use shelfmark_core::RegisterRequest;

#[tokio::test]
async fn anonymous_calls_carry_no_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/books/")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let client = ApiClient::new(ClientConfig::new(format!("{}/api", server.url())), store)
        .expect("client");

    let response = client
        .request(Method::GET, "books/", None, &[])
        .await
        .expect("books");
    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn stored_access_token_is_sent_as_bearer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/my-books/")
        .match_header("authorization", "Bearer abc")
        .match_header("content-type", "application/json")
        .match_query(Matcher::UrlEncoded("source".into(), "cli".into()))
        .match_body(Matcher::Json(json!({ "book_id": 7 })))
        .with_status(201)
        .with_body(json!({ "id": 1, "pages_read": 0 }).to_string())
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::with_tokens(Some("abc"), Some("r")));
    let client = ApiClient::new(ClientConfig::new(format!("{}/api/", server.url())), store)
        .expect("client");

    let response = client
        .request(
            Method::POST,
            "/my-books/",
            Some(json!({ "book_id": 7 })),
            &[("source", "cli".to_string())],
        )
        .await
        .expect("created");
    assert_eq!(response.status(), StatusCode::CREATED);
    mock.assert_async().await;
}

#[tokio::test]
async fn per_call_content_type_replaces_default() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/books/")
        .match_header("content-type", "text/plain")
        .match_body("Kindred")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let client = ApiClient::new(ClientConfig::new(format!("{}/api", server.url())), store)
        .expect("client");

    let request = ApiRequest::post("books/")
        .bytes(b"Kindred".to_vec())
        .header(reqwest::header::CONTENT_TYPE, "text/plain")
        .expect("header");
    let response = client.send(&request).await.expect("sent");
    assert!(response.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn login_stores_token_pair() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/login/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({ "username": "ada", "password": "secret" })))
        .with_status(200)
        .with_body(json!({ "access": "a1", "refresh": "r1" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::with_tokens(Some("stale"), None));
    let client = ApiClient::new(
        ClientConfig::new(format!("{}/api", server.url())),
        store.clone(),
    )
    .expect("client");
    let mut events = client.subscribe();

    client.login("ada", "secret").await.expect("login");

    assert_eq!(store.access_token().expect("load").as_deref(), Some("a1"));
    assert_eq!(store.refresh_token().expect("load").as_deref(), Some("r1"));
    assert!(client.is_authenticated().expect("state"));
    assert_eq!(events.try_recv().ok(), Some(SessionEvent::LoggedIn));
    mock.assert_async().await;
}

#[tokio::test]
async fn bad_credentials_do_not_trigger_refresh() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/login/")
        .with_status(401)
        .with_body(json!({ "detail": "No active account found" }).to_string())
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/token/refresh/")
        .expect(0)
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::with_tokens(None, Some("r")));
    let client = ApiClient::new(
        ClientConfig::new(format!("{}/api", server.url())),
        store.clone(),
    )
    .expect("client");

    let err = client.login("ada", "wrong").await.expect_err("rejected");
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(store.refresh_token().expect("load").as_deref(), Some("r"));
    refresh.assert_async().await;
}

#[tokio::test]
async fn register_then_logout() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/register/")
        .match_body(Matcher::PartialJson(json!({ "username": "ada", "email": "ada@example.com" })))
        .with_status(201)
        .with_body(json!({ "id": 4, "username": "ada", "email": "ada@example.com" }).to_string())
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::with_tokens(Some("a"), Some("r")));
    let client = ApiClient::new(
        ClientConfig::new(format!("{}/api", server.url())),
        store.clone(),
    )
    .expect("client");
    let mut events = client.subscribe();

    let user = client
        .register(&RegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("registered");
    assert_eq!(user.id, 4);

    client.logout().expect("logout");
    assert!(!client.is_authenticated().expect("state"));
    assert!(store.refresh_token().expect("load").is_none());
    assert_eq!(events.try_recv().ok(), Some(SessionEvent::LoggedOut));
}

#[tokio::test]
async fn decode_mismatch_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/my-books/stats/")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::with_tokens(Some("a"), Some("r")));
    let client = ApiClient::new(ClientConfig::new(format!("{}/api", server.url())), store)
        .expect("client");

    let err = client
        .get_json::<shelfmark_core::LibraryStats>("my-books/stats/")
        .await
        .expect_err("decode failure");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn absolute_links_to_another_origin_never_get_the_token() {
    let mut server = Server::new_async().await;
    let mut foreign = Server::new_async().await;
    let leaked = foreign
        .mock("GET", "/books/")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let next_page = server
        .mock("GET", "/api/books/")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .match_header("authorization", "Bearer secret-access")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemorySessionStore::with_tokens(
        Some("secret-access"),
        Some("r"),
    ));
    let client = ApiClient::new(ClientConfig::new(format!("{}/api", server.url())), store)
        .expect("client");

    let err = client
        .send(&ApiRequest::get(format!("{}/books/?page=2", foreign.url())))
        .await
        .expect_err("foreign origin refused");
    assert!(matches!(err, ApiError::InvalidRequest(_)), "{err}");

    client
        .send(&ApiRequest::get(format!("{}/api/books/?page=2", server.url())))
        .await
        .expect("same origin link");

    leaked.assert_async().await;
    next_page.assert_async().await;
}
