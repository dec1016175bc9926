use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::{AppState, GameConsole, Metrics};
use backend_infrastructure::{load_demo_catalog, AppConfig, RconConsole, SupabaseStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config_path: Option<&str>) -> Result<Self> {
        let config = AppConfig::load(config_path).await?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let store_config = config.to_store_config();
        let rcon_config = config.to_rcon_config();
        let store_mode = store_config.mode();
        info!(
            store_mode = store_mode.as_str(),
            store = ?store_config,
            rcon = ?rcon_config,
            api_token_set = runtime_config.api_token.is_some(),
            "configuration loaded"
        );

        let store = Arc::new(SupabaseStore::new(store_config)?);
        let demo = if runtime_config.demo_fallback {
            let catalog = load_demo_catalog(config.demo_catalog_path.as_deref()).await?;
            Some(Arc::new(catalog))
        } else {
            None
        };
        let console = GameConsole::new(Arc::new(RconConsole::new(rcon_config)));

        let state = AppState {
            config: runtime_config,
            store_mode,
            players: store.clone(),
            catalog: store.clone(),
            showcase: store.clone(),
            audit: store,
            console,
            demo,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
