//! Web front for the standings.

use crate::standings::{self, fetch, Error};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the routes need, built once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Page snapshot served by `/fixtures`
    pub cache_path: PathBuf,
    /// Page fetched live by `/standings`
    pub source_url: String,
    /// Table ids to render, left to right
    pub conferences: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: String::from("0.0.0.0:3000"),
            cache_path: PathBuf::from("test.html"),
            source_url: fetch::STANDINGS_URL.to_string(),
            conferences: vec![String::from("AFC"), String::from("NFC")],
        }
    }
}

impl ServerConfig {
    /// Reads `PORT`, `CACHE_PATH` and `STANDINGS_URL`, falling back to the defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(port) = std::env::var("PORT") {
            config.bind_addr = format!("0.0.0.0:{}", port);
        }
        if let Ok(path) = std::env::var("CACHE_PATH") {
            config.cache_path = PathBuf::from(path);
        }
        if let Ok(url) = std::env::var("STANDINGS_URL") {
            config.source_url = url;
        }
        config
    }
}

pub fn build_app(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/fixtures", get(fixtures))
        .route("/standings", get(live_standings))
        .with_state(Arc::new(config))
}

pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Running on http://{}", config.bind_addr);
    axum::serve(listener, build_app(config)).await?;
    Ok(())
}

async fn home() -> &'static str {
    "NFL Stats API"
}

/// Standings from the page snapshot on disk
async fn fixtures(State(config): State<Arc<ServerConfig>>) -> Response {
    let html = match fetch::read_html_from_file(&config.cache_path) {
        Ok(html) => html,
        Err(Error::CacheMissing(path)) => {
            info!("No cached page at {}", path.display());
            return StatusCode::NOT_FOUND.into_response();
        }
        Err(e) => {
            error!("Failed to read cached page: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let body = standings::render_conferences(&html, &config.conferences);
    ([(header::CONTENT_TYPE, "text/html")], body).into_response()
}

/// Standings straight from the site
async fn live_standings(State(config): State<Arc<ServerConfig>>) -> Response {
    match fetch::fetch_page(&config.source_url).await {
        Ok(html) => {
            let body = standings::render_conferences(&html, &config.conferences);
            (
                [
                    (header::CONTENT_TYPE, "text/html"),
                    (header::CACHE_CONTROL, "s-max-age=1, stale-while-revalidate"),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            error!("Error getting results: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn config_with_cache(cache_path: PathBuf) -> ServerConfig {
        ServerConfig {
            cache_path,
            ..ServerConfig::default()
        }
    }

    async fn get_path(app: Router, path: &str) -> Response {
        app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn home_page() {
        let response = get_path(build_app(ServerConfig::default()), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "NFL Stats API");
    }

    #[tokio::test]
    async fn fixtures_from_cache() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.html");
        std::fs::write(&path, include_str!("standings/standings-2023.html")).unwrap();

        let response = get_path(build_app(config_with_cache(path)), "/fixtures").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        let body = body_string(response).await;
        assert!(body.starts_with("<div style='display: flex; gap:40px;'>"));
        assert!(body.contains("<h1>AFC</h1>"));
        assert!(body.contains("<h1>NFC</h1>"));
        assert!(body.contains("<td>Baltimore Ravens*</td><td>13</td><td>4</td>"));
    }

    #[tokio::test]
    async fn fixtures_without_cache() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_cache(dir.path().join("missing.html"));

        let response = get_path(build_app(config), "/fixtures").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn fixtures_with_unreadable_cache() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_cache(dir.path().to_path_buf());

        let response = get_path(build_app(config), "/fixtures").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn fixtures_without_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.html");
        std::fs::write(&path, "<html><body><p>Nothing here</p></body></html>").unwrap();

        let response = get_path(build_app(config_with_cache(path)), "/fixtures").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert_eq!(body.matches("No data available").count(), 2);
    }

    #[tokio::test]
    async fn live_standings_unreachable() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = ServerConfig {
            source_url: String::from("http://127.0.0.1:9/years/2023"),
            ..ServerConfig::default()
        };

        let response = get_path(build_app(config), "/standings").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Internal Server Error"}"#
        );
    }
}
