//! Coffee SNOB web server
//!
//! Hosts the compiled frontend and exposes the shop dataset read-only.
//! Ratings never reach the server; they live in the visitor's browser.
//!
//! # Endpoints
//!
//! ## Shops
//! - `GET /api/v1/shops` - List all shops
//! - `GET /api/v1/shops/:id` - Get a shop
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Frontend
//! Every other path is served from the static bundle directory. Unknown
//! paths get `index.html` so client-side routes like `/shops/3` deep-link.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/shops", get(routes::shops::list_shops))
        .route("/shops/:id", get(routes::shops::get_shop));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let frontend = ServeDir::new(state.static_dir()).fallback(ServeFile::new(state.index_file()));
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// CORS for the read-only API; an empty list allows same-origin only
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();

    if !state.has_frontend() {
        tracing::warn!(
            "No frontend bundle at {:?}; only the API will respond. Run `trunk build` in ui/",
            state.index_file()
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Coffee SNOB listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Coffee SNOB shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::shops::{test_shop, ShopCatalog};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>Coffee SNOB</body></html>";

    fn create_test_app(with_frontend: bool) -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        if with_frontend {
            std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.path().join("app.js"), "console.log('snob')").unwrap();
        }

        let catalog = ShopCatalog::new(vec![
            test_shop(1, "Test Roast", 10.0, 20.0),
            test_shop(2, "Second Crack", 11.0, 21.0),
        ])
        .unwrap();
        let config = ServerConfig {
            static_dir: dir.path().to_string_lossy().to_string(),
            ..Default::default()
        };

        (build_router(AppState::new(catalog, config)), dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        assert_eq!(get(app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_requires_frontend() {
        let (app, _dir) = create_test_app(false);
        assert_eq!(
            get(app, "/health/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        let (app, _dir) = create_test_app(true);
        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(true);
        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["shops"], 2);
    }

    #[tokio::test]
    async fn test_list_shops() {
        let (app, _dir) = create_test_app(false);
        let response = get(app, "/api/v1/shops").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["count"], 2);
        assert_eq!(body["shops"][0]["name"], "Test Roast");
        assert_eq!(body["shops"][0]["lat"], 10.0);
    }

    #[tokio::test]
    async fn test_get_shop() {
        let (app, _dir) = create_test_app(false);
        let response = get(app, "/api/v1/shops/2").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], 2);
        assert_eq!(body["name"], "Second Crack");
    }

    #[tokio::test]
    async fn test_get_shop_not_found() {
        let (app, _dir) = create_test_app(false);
        let response = get(app, "/api/v1/shops/99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_get_shop_invalid_id() {
        let (app, _dir) = create_test_app(false);
        let response = get(app, "/api/v1/shops/espresso").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        for uri in ["/", "/shops", "/shops/1", "/shops/404"] {
            let (app, _dir) = create_test_app(true);
            let response = get(app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert_eq!(body_string(response).await, INDEX_HTML);
        }
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (app, _dir) = create_test_app(true);
        let response = get(app, "/app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "console.log('snob')");
    }
}
