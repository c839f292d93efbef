//! End-to-end round trip: client -> rate service -> mock upstream ->
//! in-memory store -> JSON response -> file write.

use axum::routing::get;
use axum::Router;
use client::{write_quote, ClientError, QuoteClient};
use common::Deadline;
use service::{AppState, QuoteServer, ServiceConfig};
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use storage::SqliteRateStore;
use tokio_util::sync::CancellationToken;
use upstream::RateFetcher;

const UPSTREAM_BODY: &str =
    r#"{"USDBRL":{"code":"USD","codein":"BRL","bid":"5.4312","ask":"5.4318"}}"#;

async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Spawn a full rate service on an ephemeral port, backed by the given
/// upstream router and a fresh in-memory store.
async fn spawn_service(upstream_router: Router) -> (SocketAddr, SqliteRateStore) {
    let upstream_addr = spawn_upstream(upstream_router).await;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = SqliteRateStore::from_pool(pool);
    store.ensure_schema().await.unwrap();

    let config = ServiceConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        upstream_url: format!("http://{}/json/last/USD-BRL", upstream_addr),
        ..ServiceConfig::default()
    };
    let fetcher = RateFetcher::new(config.upstream_url.as_str()).unwrap();
    let state = Arc::new(AppState::new(
        fetcher,
        Arc::new(store.clone()),
        config.fetch_timeout,
        config.persist_timeout,
    ));

    let server = Arc::new(QuoteServer::new(config, state));
    let run_server = server.clone();
    let token = CancellationToken::new();
    tokio::spawn(async move { run_server.run(token).await });

    // Wait for the listener to come up.
    for _ in 0..50 {
        if let Some(addr) = server.address() {
            return (addr, store);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("rate service did not start");
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("cambio-e2e-{}-{}", std::process::id(), name))
}

#[tokio::test]
async fn successful_round_trip_writes_bid_to_file() {
    let upstream = Router::new().route("/json/last/USD-BRL", get(|| async { UPSTREAM_BODY }));
    let (service_addr, store) = spawn_service(upstream).await;

    let quote_client = QuoteClient::new(format!("http://{}", service_addr)).unwrap();
    let bid = quote_client
        .fetch_quote(Deadline::after(Duration::from_secs(5)))
        .await
        .unwrap();
    assert_eq!(bid, "5.4312");

    // Exactly one stored row for the served request.
    assert_eq!(store.count().await.unwrap(), 1);

    let path = temp_path("round-trip.txt");
    write_quote(&path, &bid).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("5.4312"));
    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn slow_upstream_round_trip_reports_error_and_writes_nothing() {
    let upstream = Router::new().route(
        "/json/last/USD-BRL",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            UPSTREAM_BODY
        }),
    );
    let (service_addr, store) = spawn_service(upstream).await;

    let quote_client = QuoteClient::new(format!("http://{}", service_addr)).unwrap();
    let err = quote_client
        .fetch_quote(Deadline::after(Duration::from_secs(5)))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Remote(_)));
    assert!(err.to_string().contains("upstream"));
    assert_eq!(store.count().await.unwrap(), 0);
}
