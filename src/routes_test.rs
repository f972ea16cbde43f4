use std::path::PathBuf;

use super::*;

fn test_config() -> Config {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Config {
        port: 0,
        static_dir: root.join("static"),
        pkg_dir: root.join("tests/fixtures/pkg"),
    }
}

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app(&test_config());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn root_serves_shell_with_toggle() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"id="theme-toggle""#));
    assert!(body.contains("/pkg/theme.js"));
}

#[tokio::test]
async fn static_serves_stylesheet() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/static/css/theme.css")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"[data-theme="dark"]"#));
}

#[tokio::test]
async fn pkg_serves_bundle() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/pkg/theme.js")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("export function mount"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/departments/nope")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
