// Domain entities

pub mod config;
pub mod demo;
pub mod donation;
pub mod feedback;
pub mod player;
pub mod showcase;

pub use config::*;
pub use demo::*;
pub use donation::*;
pub use feedback::*;
pub use player::*;
pub use showcase::*;
