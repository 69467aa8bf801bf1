use std::sync::Arc;

use sqlx::PgPool;

use crate::applications::store::ApplicationStore;
use crate::config::Config;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable match scorer. Default: WeightedMatchScorer built from `config.match_weights`.
    pub match_scorer: Arc<dyn MatchScorer>,
    /// Application persistence. Default: PgApplicationStore over `db`.
    pub application_store: Arc<dyn ApplicationStore>,
}
