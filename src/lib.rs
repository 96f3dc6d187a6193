pub mod auth;
pub mod common;
pub mod downloader;
pub mod settings;

pub use common::api::{ApiError, SteamerApi, SteamerClient};
