use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable match scorer. Default: HeuristicMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
