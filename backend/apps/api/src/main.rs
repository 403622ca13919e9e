//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; handlers answer with their crate's
//! error type, rendered through `kernel::error::AppError`.

mod config;

use axum::{Json, Router, routing::get};
use branding::{BrandingSettings, branding_router, load_settings};
use origin_gate::{OriginGate, with_origin_gate};
use pagination::pagination_router;
use platform::env::EnvReader;
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,origin_gate=info,pagination=info,branding=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env(&EnvReader::process())?;

    let settings = match &config.settings_path {
        Some(path) => load_settings(path).await?,
        None => {
            tracing::info!("SETTINGS_PATH not set, using default branding");
            BrandingSettings::default()
        }
    };

    let app = build_router(&config, settings)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Routes behind the origin gate, with request tracing outermost so gate
/// answered preflights are traced too
fn build_router(config: &AppConfig, settings: BrandingSettings) -> anyhow::Result<Router> {
    let gate = OriginGate::new(&config.gate)?;

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/pagination", pagination_router(config.pagination.clone()))
        .nest("/api/branding", branding_router(settings));

    Ok(with_origin_gate(router, gate).layer(TraceLayer::new_for_http()))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use origin_gate::GateConfig;
    use pagination::PaginationConfig;
    use tower::ServiceExt;

    fn config(gate: GateConfig) -> AppConfig {
        AppConfig {
            port: 0,
            gate,
            pagination: PaginationConfig::default(),
            settings_path: None,
        }
    }

    fn app() -> Router {
        build_router(&config(GateConfig::default()), BrandingSettings::default()).unwrap()
    }

    async fn send(router: Router, method: Method, uri: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        router.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(app(), Method::GET, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_api_routes_are_gated() {
        let response = send(
            app(),
            Method::GET,
            "/api/pagination/window?currentPage=50&totalItems=1000",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&header::HeaderValue::from_static("http://localhost:3000"))
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["pageNumbers"], json!([48, 49, 50, 51, 52]));
    }

    #[tokio::test]
    async fn test_preflight_short_circuits() {
        let response = send(app(), Method::OPTIONS, "/api/branding/welcome").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
        );
    }

    #[tokio::test]
    async fn test_branding_route() {
        let response = send(app(), Method::GET, "/api/branding/admin").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(app(), Method::GET, "/api/branding/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[derive(Clone, Default)]
    struct RequestSpans(std::sync::Arc<std::sync::atomic::AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for RequestSpans {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if attrs.metadata().name() == "request" {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn test_gate_answered_preflight_is_traced() {
        let spans = RequestSpans::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(spans.clone()));

        let response = send(app(), Method::OPTIONS, "/api/pagination/window").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(spans.0.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_gate_config_fails_startup() {
        let gate = GateConfig::default().with_allowed_headers(["Bad Header"]);
        assert!(build_router(&config(gate), BrandingSettings::default()).is_err());
    }
}
