pub mod download;
pub mod login;
pub mod settings;

pub use download::{DownloadQueueResponse, DownloadRequest, PopulateResult, QueueEntry};
pub use login::{LoginRequest, LoginResult, LoginTarget, LoginVerdict};
pub use settings::{SettingsAck, SettingsSnapshot, SettingsUpdate};
