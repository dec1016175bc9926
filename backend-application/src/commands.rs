// Application commands (write paths)

pub mod console_commands;
pub mod donation_commands;
pub mod feedback_commands;
