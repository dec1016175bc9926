// Domain value objects
pub mod outcome;
pub mod rank;
pub mod store_mode;

pub use outcome::*;
pub use rank::*;
pub use store_mode::*;
