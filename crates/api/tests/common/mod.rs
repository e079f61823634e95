#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use movieflix_api::app;
use movieflix_api::config::ServerConfig;

pub const BASE_URL: &str = "http://movies.test";

const BOUNDARY: &str = "----movieflix-test-boundary";

/// Build a test `ServerConfig` with safe defaults and posters under `poster_dir`.
pub fn test_config(poster_dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        poster_dir: poster_dir.path().to_string_lossy().to_string(),
        base_url: BASE_URL.to_string(),
        max_upload_bytes: 1024 * 1024,
        default_page_number: 0,
        default_page_size: 10,
        default_sort_by: "movieId".to_string(),
        default_sort_dir: "asc".to_string(),
    }
}

/// A router wired exactly like production plus the temp directory backing
/// its blob store. Keep the struct alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub posters: TempDir,
}

impl TestApp {
    pub fn poster_exists(&self, filename: &str) -> bool {
        self.posters.path().join(filename).exists()
    }
}

pub fn build_test_app(pool: PgPool) -> TestApp {
    let posters = tempfile::tempdir().expect("create poster dir");
    let state = app::build_state(pool, test_config(&posters));
    TestApp {
        router: app::build_app(state),
        posters,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn multipart(app: &TestApp, method: Method, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart encoding
// ---------------------------------------------------------------------------

pub enum Part<'a> {
    File {
        name: &'a str,
        filename: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: String,
    },
}

pub fn poster(filename: &str) -> Part<'_> {
    Part::File {
        name: "file",
        filename,
        data: b"\x89PNG\r\n\x1a\nfake-poster",
    }
}

pub fn movie_json(title: &str, release_year: i32) -> Part<'static> {
    Part::Text {
        name: "movieDto",
        value: serde_json::json!({
            "title": title,
            "director": "Christopher Nolan",
            "studio": "Syncopy",
            "movieCast": ["Cillian Murphy", "Emily Blunt"],
            "releaseYear": release_year,
        })
        .to_string(),
    }
}

fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                filename,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: image/png\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Create a movie through the API and return its id.
pub async fn add_movie(app: &TestApp, title: &str, release_year: i32, filename: &str) -> i64 {
    let response = multipart(
        app,
        Method::POST,
        "/api/v1/movie/add-movie",
        &[poster(filename), movie_json(title, release_year)],
    )
    .await;
    assert_eq!(response.status(), 201, "add-movie failed for {title}");
    body_json(response).await["movieId"].as_i64().unwrap()
}
