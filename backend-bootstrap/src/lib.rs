pub mod context;
pub mod lifecycle;
pub mod logging;

pub use lifecycle::run_standalone;
pub use logging::{init_logging, LogFormat};
