//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p plexgate-api --test gateway_test`.
//! No external services: the catalog is an in-memory SQLite database, the
//! origin is an in-process axum server on an ephemeral port, and the signer
//! is a recording stub.

use async_trait::async_trait;
use axum::{body::Body, extract::Request, response::Response, Router};
use axum_test::TestServer;
use plexgate_api::setup::routes;
use plexgate_api::state::AppState;
use plexgate_core::Config;
use plexgate_db::PartCatalog;
use plexgate_storage::{StorageError, StorageResult, StorageSigner};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A part id seeded into the test catalog with a stored file.
pub const KNOWN_PART: &str = "42";
/// The stored path for `KNOWN_PART` as it appears in the catalog.
pub const KNOWN_PART_FILE: &str = "/media/Movies/Interstellar (2014)/Interstellar.mkv";
/// A part id seeded with a NULL file column.
pub const NULL_FILE_PART: &str = "7";

/// Signer stub: returns a deterministic URL and records every call.
pub struct StubSigner {
    fail: bool,
    pub calls: Mutex<Vec<(String, Duration)>>,
}

#[async_trait]
impl StorageSigner for StubSigner {
    async fn presigned_get_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((storage_key.to_string(), expires_in));

        if self.fail {
            return Err(StorageError::SignFailed("stub signer failure".to_string()));
        }

        Ok(format!(
            "https://media-test.s3.test/{}?X-Amz-Expires={}",
            storage_key,
            expires_in.as_secs()
        ))
    }
}

/// In-process stand-in for the origin Plex server. Records every request it
/// receives as "METHOD /path?query".
pub struct Origin {
    pub base_url: String,
    pub hits: Arc<Mutex<Vec<String>>>,
}

impl Origin {
    pub fn hit_count(&self) -> usize {
        self.hits.lock().unwrap().len()
    }
}

async fn origin_handler(hits: Arc<Mutex<Vec<String>>>, request: Request) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_default();
    hits.lock()
        .unwrap()
        .push(format!("{} {}", request.method(), path_and_query));

    // A multi-chunk body for streaming tests; everything else echoes its path.
    let body = if request.uri().path() == "/big" {
        "x".repeat(8 * 1024 * 1024)
    } else {
        format!("origin response: {}", path_and_query)
    };

    Response::builder()
        .status(200)
        .header("content-type", "text/plain")
        .header("content-encoding", "identity")
        .header("x-plex-protocol", "1.0")
        .header("x-origin", "plex-test")
        .body(Body::from(body))
        .unwrap()
}

/// Bind an ephemeral port and serve the origin router on it.
pub async fn spawn_origin() -> Origin {
    let hits: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = hits.clone();

    let app = Router::new().fallback(move |request: Request| {
        let recorded = recorded.clone();
        async move { origin_handler(recorded, request).await }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind origin listener");
    let addr = listener.local_addr().expect("origin local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve origin");
    });

    Origin {
        base_url: format!("http://{}", addr),
        hits,
    }
}

// One connection: each in-memory SQLite connection is its own database.
async fn seeded_catalog() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");

    sqlx::query("CREATE TABLE media_parts (id INTEGER PRIMARY KEY, file TEXT)")
        .execute(&pool)
        .await
        .expect("create media_parts");
    sqlx::query("INSERT INTO media_parts (id, file) VALUES (?, ?)")
        .bind(KNOWN_PART)
        .bind(KNOWN_PART_FILE)
        .execute(&pool)
        .await
        .expect("seed known part");
    sqlx::query("INSERT INTO media_parts (id, file) VALUES (?, NULL)")
        .bind(NULL_FILE_PART)
        .execute(&pool)
        .await
        .expect("seed null-file part");

    pool
}

fn test_config(origin_base_url: &str) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        catalog_path: ":memory:".to_string(),
        origin_url: origin_base_url.to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        s3_bucket: "media-test".to_string(),
        s3_region: Some("us-east-1".to_string()),
        s3_endpoint: None,
        aws_region: None,
        signed_url_expiry_secs: 18000,
        upstream_connect_timeout_secs: 5,
    }
}

/// Test application: gateway server plus handles on its collaborators.
pub struct TestApp {
    pub server: TestServer,
    pub origin: Origin,
    pub signer: Arc<StubSigner>,
    pub pool: SqlitePool,
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(false).await
}

pub async fn setup_test_app_with(signer_fails: bool) -> TestApp {
    let origin = spawn_origin().await;
    let base_url = origin.base_url.clone();
    let mut app = setup_test_app_against(&base_url, signer_fails).await;
    app.origin = origin;
    app
}

/// Build a gateway against an arbitrary origin base URL (which may point at
/// nothing at all, for upstream-failure tests).
pub async fn setup_test_app_against(origin_base_url: &str, signer_fails: bool) -> TestApp {
    let pool = seeded_catalog().await;
    let signer = Arc::new(StubSigner {
        fail: signer_fails,
        calls: Mutex::new(Vec::new()),
    });
    let signer_dyn: Arc<dyn StorageSigner> = signer.clone();

    let state = Arc::new(AppState {
        catalog: PartCatalog::new(pool.clone()),
        signer: signer_dyn,
        upstream: reqwest::Client::new(),
        config: test_config(origin_base_url),
    });

    let server = TestServer::new(routes::setup_routes(state)).expect("build test server");

    TestApp {
        server,
        origin: Origin {
            base_url: origin_base_url.to_string(),
            hits: Arc::new(Mutex::new(Vec::new())),
        },
        signer,
        pool,
    }
}
