// Adapters layer: concrete implementations for external systems (upstream API, http server, lambda).

pub mod function_url;
pub mod http;
pub mod openai;
