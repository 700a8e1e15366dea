pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod reference;
pub mod request_logger;
