pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::SteamerClient;
pub use error::ApiError;
pub use transport::SteamerApi;
