use backend_domain::{DataSource, DemoCatalog, Listing};
use tracing::warn;

use crate::AppState;

/// Picks the store rows when there are any. Otherwise serves demo rows when
/// the fallback is on, and tags the listing with where it came from.
pub fn resolve_listing<T, F>(
    state: &AppState,
    resource: &str,
    result: anyhow::Result<Vec<T>>,
    demo_rows: F,
) -> Listing<T>
where
    F: FnOnce(&DemoCatalog) -> Vec<T>,
{
    let failed = match result {
        Ok(items) if !items.is_empty() => return Listing::new(items, DataSource::Store),
        Ok(_) => false,
        Err(err) => {
            warn!(resource, error = %err, "store read failed");
            true
        }
    };

    if let Some(demo) = state.demo.as_deref() {
        return Listing::new(demo_rows(demo), DataSource::Demo);
    }
    if failed || !state.store_mode.is_configured() {
        return Listing::new(Vec::new(), DataSource::Unavailable);
    }
    Listing::new(Vec::new(), DataSource::Store)
}
