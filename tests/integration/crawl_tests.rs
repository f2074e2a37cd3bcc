//! End-to-end crawl tests against a mock HTTP server

use pget::config::{Config, CrawlMode};
use pget::crawler::{Coordinator, HttpTransport};
use pget::{PgetError, StopReason};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing into `dir`
fn create_test_config(dir: &TempDir, mode: CrawlMode) -> Config {
    let mut config = Config::default();
    config.output.directory = dir.path().to_string_lossy().into_owned();
    config.output.mode = mode;
    config.http.timeout_secs = 5;
    config.http.connect_timeout_secs = 2;
    config
}

/// Serves `{prefix}{index}{suffix}` for every index in `range`, for GET and HEAD
async fn mount_range(
    server: &MockServer,
    prefix: &str,
    suffix: &str,
    range: RangeInclusive<i64>,
    render: impl Fn(i64) -> String,
) {
    for index in range {
        let resource = format!("{}{}{}", prefix, render(index), suffix);

        Mock::given(method("GET"))
            .and(path(resource.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!("content {}", index)))
            .mount(server)
            .await;

        Mock::given(method("HEAD"))
            .and(path(resource.as_str()))
            .respond_with(ResponseTemplate::new(200))
            .mount(server)
            .await;
    }
}

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}

#[tokio::test]
async fn test_full_download_crawl() {
    // Indices 1..=19 exist; 0 and 20 onwards are 404
    let mock_server = MockServer::start().await;
    mount_range(&mock_server, "/pics/pic_", ".jpg", 1..=19, |i| i.to_string()).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir, CrawlMode::Download);
    let seed = format!("{}/pics/pic_10.jpg", mock_server.uri());

    let coordinator = Coordinator::new(config, &seed).expect("Failed to create coordinator");
    let summary = coordinator.run().await.expect("Crawl failed");

    assert_eq!(summary.descending.stopped_at, 0);
    assert_eq!(summary.ascending.stopped_at, 20);
    assert_eq!(summary.total_retrieved(), 19);
    assert!(summary.descending.reason.is_missing());
    assert!(summary.ascending.reason.is_missing());

    for index in 1..=19 {
        let file = dir.path().join(format!("pic_{}.jpg", index));
        let content = std::fs::read_to_string(&file).expect("Missing downloaded file");
        assert_eq!(content, format!("content {}", index));
    }
    assert!(!dir.path().join("pic_0.jpg").exists());
    assert!(!dir.path().join("pic_20.jpg").exists());

    let expected_bytes: u64 = (1..=19).map(|i| format!("content {}", i).len() as u64).sum();
    assert_eq!(summary.total_bytes(), expected_bytes);
}

#[tokio::test]
async fn test_probe_only_writes_nothing() {
    let mock_server = MockServer::start().await;
    mount_range(&mock_server, "/pics/pic_", ".jpg", 1..=19, |i| i.to_string()).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, CrawlMode::Probe);
    let seed = format!("{}/pics/pic_10.jpg", mock_server.uri());

    let summary = Coordinator::new(config, &seed)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(summary.descending.stopped_at, 0);
    assert_eq!(summary.ascending.stopped_at, 20);
    assert_eq!(summary.total_bytes(), 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.to_string() == "HEAD"));
}

#[tokio::test]
async fn test_missing_seed_fails_fast() {
    let mock_server = MockServer::start().await;
    mount_range(&mock_server, "/pics/pic_", ".jpg", 1..=19, |i| i.to_string()).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, CrawlMode::Download);
    let seed = format!("{}/pics/pic_42.jpg", mock_server.uri());

    let result = Coordinator::new(config, &seed).unwrap().run().await;

    assert!(matches!(
        result,
        Err(PgetError::NotFound {
            status: Some(404),
            ..
        })
    ));
    // Only the seed probe was sent
    assert_eq!(request_count(&mock_server).await, 1);
}

#[tokio::test]
async fn test_padded_index() {
    let mock_server = MockServer::start().await;
    mount_range(&mock_server, "/scans/page", ".png", 98..=103, |i| {
        format!("{:04}", i)
    })
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, CrawlMode::Download);
    let seed = format!("{}/scans/page0100.png", mock_server.uri());

    let summary = Coordinator::new(config, &seed)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(summary.descending.stopped_at, 97);
    assert_eq!(summary.ascending.stopped_at, 104);
    assert!(dir.path().join("page0098.png").exists());
    assert!(dir.path().join("page0103.png").exists());
}

#[tokio::test]
async fn test_query_index() {
    let mock_server = MockServer::start().await;
    for page in 1..=3 {
        Mock::given(method("GET"))
            .and(path("/view.php"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!("page {}", page)))
            .mount(&mock_server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/view.php"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, CrawlMode::Download);
    let seed = format!("{}/view.php?page=2", mock_server.uri());

    let summary = Coordinator::new(config, &seed)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(summary.descending.stopped_at, 0);
    assert_eq!(summary.ascending.stopped_at, 4);
    assert_eq!(summary.total_retrieved(), 3);
    // Every page shares the file name of the final path segment
    assert!(dir.path().join("view.php").exists());
}

#[tokio::test]
async fn test_server_error_stops_direction() {
    let mock_server = MockServer::start().await;
    mount_range(&mock_server, "/f", ".bin", 5..=9, |i| i.to_string()).await;
    Mock::given(method("GET"))
        .and(path("/f10.bin"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    mount_range(&mock_server, "/f", ".bin", 11..=12, |i| i.to_string()).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, CrawlMode::Download);
    let seed = format!("{}/f7.bin", mock_server.uri());

    let summary = Coordinator::new(config, &seed)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(summary.descending.stopped_at, 4);
    assert_eq!(summary.ascending.stopped_at, 10);
    assert_eq!(
        summary.ascending.reason,
        StopReason::Missing { status: Some(503) }
    );
    assert!(!dir.path().join("f11.bin").exists());
}

#[tokio::test]
async fn test_empty_body_not_written() {
    let mock_server = MockServer::start().await;
    mount_range(&mock_server, "/d/", ".txt", 1..=1, |i| i.to_string()).await;
    Mock::given(method("GET"))
        .and(path("/d/2.txt"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir, CrawlMode::Download);
    config.crawl.verify_start = false;
    let seed = format!("{}/d/1.txt", mock_server.uri());

    let summary = Coordinator::new(config, &seed)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(summary.ascending.stopped_at, 3);
    assert_eq!(summary.ascending.retrieved, 1);
    assert_eq!(summary.ascending.bytes, 0);
    assert!(dir.path().join("1.txt").exists());
    assert!(!dir.path().join("2.txt").exists());
}

#[tokio::test]
async fn test_check_padding_detects_padded_site() {
    let mock_server = MockServer::start().await;
    mount_range(&mock_server, "/c/", ".jpg", 98..=101, |i| format!("{:03}", i)).await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir, CrawlMode::Probe);
    config.crawl.check_padding = true;
    let seed = format!("{}/c/100.jpg", mock_server.uri());

    let summary = Coordinator::new(config, &seed)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(summary.descending.stopped_at, 97);
    assert_eq!(summary.ascending.stopped_at, 102);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, CrawlMode::Download);
    let transport = Arc::new(HttpTransport::new(&config.http).unwrap());
    let seed = format!("http://127.0.0.1:{}/pic_1.jpg", port);

    let result = Coordinator::with_transport(config, &seed, transport)
        .unwrap()
        .run()
        .await;

    assert!(matches!(result, Err(PgetError::Transport { .. })));
}
