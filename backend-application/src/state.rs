use std::sync::Arc;

use backend_domain::ports::{AuditRepository, CatalogRepository, PlayerRepository, ShowcaseRepository};
use backend_domain::{DemoCatalog, RuntimeConfig, StoreMode};

use crate::{GameConsole, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    /// Fixed at startup.
    pub store_mode: StoreMode,
    pub players: Arc<dyn PlayerRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub showcase: Arc<dyn ShowcaseRepository>,
    pub audit: Arc<dyn AuditRepository>,
    pub console: GameConsole,
    /// Present when demo fallback is enabled. Read paths only.
    pub demo: Option<Arc<DemoCatalog>>,
    pub metrics: Arc<Metrics>,
}
