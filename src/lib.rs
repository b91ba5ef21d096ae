pub mod analyze;
pub mod config;
pub mod error;
pub mod parse;
pub mod server;
pub mod validate;
