use serde_json::json;
use unsplash_cli::api::UnsplashClient;
use unsplash_cli::core::{Adjustment, Crop, Orientation, UnsplashError};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCESS_KEY: &str = "test-access-key";
const SECRET_KEY: &str = "unused-secret";

async fn start() -> (MockServer, UnsplashClient) {
    let server = MockServer::start().await;
    let client = UnsplashClient::new(ACCESS_KEY)
        .with_secret_key(SECRET_KEY)
        .with_base_url(server.uri());
    (server, client)
}

fn random_photo_body() -> serde_json::Value {
    json!({
        "id": "abc123",
        "description": null,
        "alt_description": "a foggy forest",
        "urls": {
            "raw": "https://img.example/y",
            "full": "https://img.example/y?full",
            "regular": "https://img.example/y?regular",
            "small": "https://img.example/y?small",
            "thumb": "https://img.example/y?thumb"
        },
        "user": { "name": "Alice", "username": "alice" },
        "links": { "html": "https://unsplash.com/photos/abc123" },
        "likes": 42
    })
}

#[tokio::test]
async fn random_image_is_built_from_raw_url_and_user_name() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .and(query_param("client_id", ACCESS_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(random_photo_body()))
        .expect(1)
        .mount(&server)
        .await;

    let image = client.get_random_image(None, None).await.unwrap();

    assert_eq!(image.base_url(), "https://img.example/y");
    assert_eq!(image.owner_name(), Some("Alice"));
    assert_eq!(image.url(), "https://img.example/y");
}

#[tokio::test]
async fn minimal_response_is_enough() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "urls": { "raw": "https://img.example/y" },
            "user": { "name": "Alice" }
        })))
        .mount(&server)
        .await;

    let mut image = client.get_random_image(None, None).await.unwrap();
    assert_eq!(image.base_url(), "https://img.example/y");
    assert_eq!(image.owner_name(), Some("Alice"));

    image.adjust(Adjustment::new().with_width(100).with_crop([Crop::Faces, Crop::Top]));
    assert_eq!(image.url(), "https://img.example/y&width=100&crop=faces,top");
}

#[tokio::test]
async fn query_and_orientation_are_forwarded() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .and(query_param("client_id", ACCESS_KEY))
        .and(query_param("query", "sea lions"))
        .and(query_param("orientation", "squarish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(random_photo_body()))
        .expect(1)
        .mount(&server)
        .await;

    let photo = client
        .fetch_random_photo(Some("sea lions"), Some(Orientation::Squarish))
        .await
        .unwrap();

    assert_eq!(photo.id.as_deref(), Some("abc123"));
    assert_eq!(photo.owner_name(), Some("Alice"));
    assert_eq!(photo.links.and_then(|l| l.html).as_deref(), Some("https://unsplash.com/photos/abc123"));
}

#[tokio::test]
async fn get_swallows_not_found_into_empty_object() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "errors": ["Not found"] })))
        .mount(&server)
        .await;

    let body = client.get("photos/random", &[]).await.unwrap();

    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn get_returns_parsed_body_and_passes_params() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/xyz/"))
        .and(query_param("client_id", ACCESS_KEY))
        .and(query_param("w", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "xyz" })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.get("photos/xyz", &[("w", "10")]).await.unwrap();

    assert_eq!(body["id"], "xyz");
}

#[tokio::test]
async fn get_checked_reports_status_and_api_errors() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "errors": ["OAuth error: The access token is invalid"] })),
        )
        .mount(&server)
        .await;

    let err = client.get_checked("photos/random", &[]).await.unwrap_err();

    match err {
        UnsplashError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "OAuth error: The access token is invalid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn random_image_surfaces_failed_request_as_error() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Rate Limit Exceeded"))
        .mount(&server)
        .await;

    let err = client.get_random_image(Some("cats"), None).await.unwrap_err();

    assert!(matches!(err, UnsplashError::Status { status: 403, ref message } if message == "Rate Limit Exceeded"));
}

#[tokio::test]
async fn random_image_without_raw_url_is_invalid_response() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": { "name": "Alice" } })))
        .mount(&server)
        .await;

    let err = client.get_random_image(None, None).await.unwrap_err();

    assert!(matches!(err, UnsplashError::InvalidResponse(_)));
}

#[tokio::test]
async fn non_json_success_body_is_invalid_response() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.get("photos/random", &[]).await.unwrap_err();

    assert!(matches!(err, UnsplashError::InvalidResponse(_)));
}

#[tokio::test]
async fn transport_failure_is_an_api_error() {
    // Grab a free port and close it again so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = UnsplashClient::new(ACCESS_KEY).with_base_url(format!("http://127.0.0.1:{}", port));
    let err = client.get("photos/random", &[]).await.unwrap_err();

    assert!(matches!(err, UnsplashError::Api { source: Some(_), .. }));
}

#[tokio::test]
async fn secret_key_never_leaves_the_client() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .and(query_param("client_id", ACCESS_KEY))
        .and(query_param_is_missing("secret_key"))
        .and(query_param_is_missing("client_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(random_photo_body()))
        .expect(1)
        .mount(&server)
        .await;

    client.get_random_image(Some("forest"), None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(!request.url.as_str().contains(SECRET_KEY));
    assert!(request.headers.get("authorization").is_none());
    for value in request.headers.values() {
        assert!(!value.to_str().unwrap_or_default().contains(SECRET_KEY));
    }
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn empty_error_body_still_becomes_empty_object() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let body = client.get("photos/random", &[]).await.unwrap();
    assert_eq!(body, json!({}));

    let err = client.get_checked("photos/random", &[]).await.unwrap_err();
    assert!(matches!(err, UnsplashError::Status { status: 500, ref message } if message.is_empty()));
}
