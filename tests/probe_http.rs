//! Probe executor against real HTTP servers.

use std::time::{Duration, Instant};

use health_checker::config::{CheckerConfig, EndpointDescriptor};
use health_checker::health::Prober;
use reqwest::Method;
use url::Url;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::Reply;

fn prober() -> Prober<health_checker::health::HttpTransport> {
    Prober::http(&CheckerConfig::default()).unwrap()
}

fn endpoint(url: &str) -> EndpointDescriptor {
    EndpointDescriptor::get(Url::parse(url).unwrap())
}

#[tokio::test]
async fn test_fast_success_is_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(100)))
        .mount(&server)
        .await;

    let outcome = prober()
        .probe_detailed(&endpoint(&format!("{}/health", server.uri())))
        .await;

    assert!(outcome.healthy);
    assert_eq!(outcome.status, Some(200));
    assert!(outcome.latency >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_not_found_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_delay(Duration::from_millis(50)))
        .mount(&server)
        .await;

    let outcome = prober().probe_detailed(&endpoint(&server.uri())).await;
    assert!(!outcome.healthy);
    assert_eq!(outcome.status, Some(404));
}

#[tokio::test]
async fn test_slow_success_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(600)))
        .mount(&server)
        .await;

    let outcome = prober().probe_detailed(&endpoint(&server.uri())).await;
    assert!(!outcome.healthy);
    assert_eq!(outcome.status, Some(200));
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let server = MockServer::start().await;
    Mock::given(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&server)
        .await;
    Mock::given(path("/new"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    // The final response after redirects is what gets classified.
    let outcome = prober()
        .probe_detailed(&endpoint(&format!("{}/old", server.uri())))
        .await;
    assert_eq!(outcome.status, Some(200));
    assert!(outcome.healthy);
}

#[tokio::test]
async fn test_method_headers_and_body_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/some/post/endpoint"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", "fetch-synthetic-monitor"))
        .and(body_string(r#"{"foo":"bar"}"#))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let descriptor = EndpointDescriptor {
        name: Some("post endpoint".into()),
        url: Url::parse(&format!("{}/some/post/endpoint", server.uri())).unwrap(),
        method: Method::POST,
        headers: vec![
            ("content-type".into(), "application/json".into()),
            ("user-agent".into(), "fetch-synthetic-monitor".into()),
        ],
        body: Some(r#"{"foo":"bar"}"#.into()),
    };

    assert!(prober().probe(&descriptor).await);
}

#[tokio::test]
async fn test_connection_refused_is_down() {
    let addr = common::closed_port().await;
    let healthy = prober().probe(&endpoint(&format!("http://{}/", addr))).await;
    assert!(!healthy);
}

#[tokio::test]
async fn test_dns_failure_is_down() {
    let healthy = prober()
        .probe(&endpoint("http://does-not-exist.invalid/"))
        .await;
    assert!(!healthy);
}

#[tokio::test]
async fn test_hung_backend_times_out() {
    let addr = common::start_programmable_backend(|| async { Reply::Hang }).await;

    let start = Instant::now();
    let outcome = prober()
        .probe_detailed(&endpoint(&format!("http://{}/", addr)))
        .await;

    assert!(!outcome.healthy);
    assert_eq!(outcome.status, None);
    assert!(start.elapsed() < Duration::from_millis(1500));
}

#[tokio::test]
async fn test_server_error_is_down() {
    let addr = common::start_programmable_backend(|| async { Reply::now(503) }).await;
    let healthy = prober().probe(&endpoint(&format!("http://{}/", addr))).await;
    assert!(!healthy);
}
