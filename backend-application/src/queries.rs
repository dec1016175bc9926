// Application queries (read paths with demo fallback)

pub mod catalog_queries;
pub mod fallback;
pub mod health_queries;
pub mod leaderboard_queries;
pub mod showcase_queries;
