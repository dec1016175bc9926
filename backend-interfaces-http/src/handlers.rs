pub mod catalog_handlers;
pub mod donation_handlers;
pub mod feedback_handlers;
pub mod ops_handlers;

pub use catalog_handlers::*;
pub use donation_handlers::*;
pub use feedback_handlers::*;
pub use ops_handlers::*;
