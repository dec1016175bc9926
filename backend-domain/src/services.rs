// Domain services
// Pure logic with no I/O: argument filtering and remote command construction

pub mod remote_command;
pub mod sanitizer;

pub use remote_command::*;
pub use sanitizer::*;
