pub mod demo_catalog;
pub mod supabase_store;

pub use demo_catalog::*;
pub use supabase_store::*;
