//! Router assembly and server startup.

use anyhow::Result;
use axum::{
    extract::State,
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::ai_services::{RecommendationService, ValuationService};
use crate::api::handlers;
use crate::config::Config;
use crate::splitter::ChainClient;
use crate::storage::MarketStore;

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MarketStore>,
    pub config: Arc<Config>,
    pub chain: Arc<ChainClient>,
    pub valuation: Arc<ValuationService>,
    pub recommender: Arc<RecommendationService>,
}

impl AppState {
    pub fn new(store: Arc<dyn MarketStore>, config: Config) -> Self {
        let chain = Arc::new(ChainClient::new(&config));
        Self {
            store,
            config: Arc::new(config),
            chain,
            valuation: Arc::new(ValuationService::default()),
            recommender: Arc::new(RecommendationService::default()),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub network: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        network: state.config.chain_id.clone(),
    })
}

// API Router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and info endpoints
        .route("/health", get(health_check))
        // Marketplace endpoints
        .route("/api/ideas", get(handlers::ideas::list_ideas))
        .route("/api/ideas", post(handlers::ideas::submit_idea))
        .route("/api/ideas/:idea_id", get(handlers::ideas::get_idea))
        .route(
            "/api/ideas/:idea_id/invest",
            post(handlers::investments::invest),
        )
        .route(
            "/api/portfolio/:wallet_address",
            get(handlers::investments::portfolio),
        )
        // Insight endpoints
        .route(
            "/api/recommendations",
            get(handlers::insights::recommendations),
        )
        .route("/api/analytics", get(handlers::insights::analytics))
        // Splitter endpoints
        .route(
            "/api/splitter/royalties/:idea_id",
            post(handlers::splitter::royalties),
        )
        .route(
            "/api/splitter/instantiate",
            post(handlers::splitter::instantiate),
        )
        .route("/api/splitter/send", post(handlers::splitter::send))
        .route(
            "/api/splitter/tx-bodies",
            post(handlers::splitter::tx_bodies),
        )
        .route("/api/splitter/query", post(handlers::splitter::query))
        // CORS for the web frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

// Server startup
pub async fn start_api_server(state: AppState) -> Result<()> {
    let port = state.config.port;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    log::info!("IPInvest node listening on http://0.0.0.0:{}", port);
    log::info!("  GET  /health                          - Health check");
    log::info!("  GET  /api/ideas                       - Active ideas");
    log::info!("  POST /api/ideas                       - Submit idea");
    log::info!("  GET  /api/ideas/:id                   - Idea detail");
    log::info!("  POST /api/ideas/:id/invest            - Buy fractional tokens");
    log::info!("  GET  /api/portfolio/:wallet           - Investor portfolio");
    log::info!("  GET  /api/recommendations             - Scored ideas");
    log::info!("  GET  /api/analytics                   - Marketplace totals");
    log::info!("  POST /api/splitter/royalties/:id      - Royalty allocation");
    log::info!("  POST /api/splitter/instantiate        - Instantiate tx body");
    log::info!("  POST /api/splitter/send               - Send tx body");
    log::info!("  POST /api/splitter/tx-bodies          - All demo tx bodies");
    log::info!("  POST /api/splitter/query              - Chain state queries");

    axum::serve(listener, app).await?;

    Ok(())
}
