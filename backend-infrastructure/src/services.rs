pub mod rcon_console;

pub use rcon_console::*;
