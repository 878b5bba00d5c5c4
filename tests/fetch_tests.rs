//! Live fetcher tests against a wiremock server
//!
//! Covers HTTP status mapping, WAF block page detection, timeouts, and a
//! full crawl through the live fetcher.

use kb_harvest::config::{CrawlConfig, FetchConfig};
use kb_harvest::engine::CrawlEngine;
use kb_harvest::fetch::{HttpFetcher, PageFetcher};
use kb_harvest::FetchError;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetch_config() -> FetchConfig {
    FetchConfig {
        timeout_secs: 5,
        user_agent: "kb-harvest-tests/1.0".to_string(),
    }
}

#[tokio::test]
async fn test_successful_fetch_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><p>hello</p></html>"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&fetch_config()).unwrap();
    let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
    let body = fetcher.fetch(&url).await.unwrap();
    assert!(body.contains("hello"));
}

#[tokio::test]
async fn test_http_error_status_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&fetch_config()).unwrap();
    let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();
    match fetcher.fetch(&url).await {
        Err(FetchError::Http { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_block_page_is_detected_not_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocked"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Request Rejected</title></head>\
             <body>The requested URL was rejected. Your support ID is: 1234567890</body></html>",
        ))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&fetch_config()).unwrap();
    let url = Url::parse(&format!("{}/blocked", server.uri())).unwrap();
    assert!(matches!(
        fetcher.fetch(&url).await,
        Err(FetchError::BlockDetected { .. })
    ));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = FetchConfig {
        timeout_secs: 1,
        user_agent: "kb-harvest-tests/1.0".to_string(),
    };
    let fetcher = HttpFetcher::new(&config).unwrap();
    let url = Url::parse(&format!("{}/slow", server.uri())).unwrap();
    assert!(matches!(
        fetcher.fetch(&url).await,
        Err(FetchError::Timeout { .. })
    ));
}

#[tokio::test]
async fn test_full_crawl_through_live_fetcher() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/portal"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><div id="eg-ss-view">
            <ul id="sub-topics-list">
            <li><a href="{base}/portal/article-one">One</a></li>
            <li><a href="{base}/portal/article-two">Two</a></li>
            </ul></div></body></html>"#
        )))
        .mount(&server)
        .await;

    for (route, text) in [
        ("/portal/article-one", "First article body."),
        ("/portal/article-two", "Second article body."),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                r#"<html><body>
                <div id="eg-ss-article-content">
                <div id="article-body"><h1>Article</h1><p>{text}</p></div>
                </div></body></html>"#
            )))
            .mount(&server)
            .await;
    }

    let start_url = Url::parse(&format!("{}/portal", base)).unwrap();
    let mut config = CrawlConfig::default();
    config.max_depth = 1;
    config.fetch = fetch_config();
    if let Some(host) = start_url.host_str() {
        config.origins.allow_host(host);
    }

    let fetcher = HttpFetcher::new(&config.fetch).unwrap();
    let engine = CrawlEngine::new(config, fetcher);
    let report = engine.run(&start_url).await.unwrap();

    assert_eq!(report.pages_visited, 3);
    assert_eq!(report.parts.len(), 2);
    assert!(report.parts[0].markdown.contains("First article body."));
    assert!(report.parts[1].markdown.contains("Second article body."));
}
