use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobmatch_api::applications::store::PgApplicationStore;
use jobmatch_api::config::Config;
use jobmatch_api::db::create_pool;
use jobmatch_api::matching::scorer::WeightedMatchScorer;
use jobmatch_api::routes::build_router;
use jobmatch_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars or bad weights)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Initialize match scorer from configured weights
    let weights = config.match_weights;
    info!(
        "Match weights: skills={} job_type={} work_mode={} location={} experience={} (floors: intermediate={}y senior={}y)",
        weights.skills,
        weights.job_type,
        weights.work_mode,
        weights.location,
        weights.experience,
        weights.intermediate_min_years,
        weights.senior_min_years
    );
    let match_scorer = Arc::new(WeightedMatchScorer::new(weights));

    let application_store = Arc::new(PgApplicationStore::new(db.clone()));

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        match_scorer,
        application_store,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the frontend host once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
