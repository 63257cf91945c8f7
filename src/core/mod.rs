pub mod handler;
pub mod prompt;
pub mod reply;
