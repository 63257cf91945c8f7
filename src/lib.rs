pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{http::router, openai::OpenAiClient};
pub use config::ReaderConfig;
pub use crate::core::{handler::ReadingHandler, reply::ReadingReply};
pub use utils::error::{ReaderError, Result};
