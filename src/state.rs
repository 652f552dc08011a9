use std::sync::Arc;

use crate::catalog::{Catalog, InMemoryCatalog, PgCatalog};
use crate::config::{AppConfig, ScoringConfig};
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub scoring: Arc<ScoringConfig>,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = db::connect(config).await?;
        db::migrate(&pool).await;

        let catalog = Arc::new(PgCatalog::new(pool)) as Arc<dyn Catalog>;
        Ok(Self::from_parts(catalog, config.scoring.clone()))
    }

    pub fn from_parts(catalog: Arc<dyn Catalog>, scoring: ScoringConfig) -> Self {
        Self {
            catalog,
            scoring: Arc::new(scoring),
        }
    }

    /// State over an in-memory catalog with default scoring settings.
    pub fn in_memory(catalog: InMemoryCatalog) -> Self {
        Self::from_parts(Arc::new(catalog), ScoringConfig::default())
    }
}
