// Backend Application Layer

pub mod commands;
pub mod console;
pub mod dtos;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod state;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use console::GameConsole;
pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;
