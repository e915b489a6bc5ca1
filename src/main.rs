use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use dotenv::dotenv;
use product_gateway::routes::gateway_router;
use product_gateway::state::AppState;
use product_gateway::upstream::{HttpProductSource, HttpUpstreamInitializationInfo};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{event, Level};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_ansi(false)
        .json()
        .with_file(true)
        .with_line_number(true)
        .init();

    let info = HttpUpstreamInitializationInfo {
        base_url: env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| String::from("http://20.244.56.144")),
        timeout: Duration::from_secs(
            env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        ),
    };

    let product_source = Arc::new(HttpProductSource::new(&info).unwrap());

    let state = Arc::new(AppState {
        product_source: product_source,
        company: env::var("UPSTREAM_COMPANY").unwrap_or_else(|_| String::from("AMZ")),
    });

    let (prometheus_layer, metrics_handle) = PrometheusMetricLayer::pair();

    let port = env::var("GATEWAY_PORT").unwrap_or_else(|_| String::from("9876"));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    event!(Level::INFO, "Server is running on port {}...", port);

    axum::serve(
        listener,
        gateway_router(state)
            .route("/metrics", get(|| async move { metrics_handle.render() }))
            .layer(prometheus_layer)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            ),
    )
    .await
    .unwrap();
}
