use backend_domain::{DonationPackage, Listing};

use crate::queries::fallback::resolve_listing;
use crate::AppState;

/// Packages ordered by price, cheapest first.
pub async fn list_packages(state: &AppState) -> Listing<DonationPackage> {
    let result = state.catalog.list_packages().await;
    resolve_listing(state, "donation_packages", result, |demo| demo.packages.clone())
}
