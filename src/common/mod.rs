pub mod api;
pub mod config;
pub mod logger;
pub mod message_log;
