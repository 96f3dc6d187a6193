use async_trait::async_trait;
use url::Url;

use super::error::ApiError;
use super::models::{
    DownloadRequest, LoginRequest, LoginResult, PopulateResult, QueueEntry, SettingsAck,
    SettingsSnapshot, SettingsUpdate,
};

/// 控制器与服务端之间的接缝，测试中可以替换为内存实现
#[async_trait]
pub trait SteamerApi: Send + Sync {
    /// 站点根地址，登录成功后跳转到这里
    fn origin(&self) -> &Url;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResult, ApiError>;

    async fn fetch_settings(&self) -> Result<SettingsSnapshot, ApiError>;

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<SettingsAck, ApiError>;

    /// 提交下载计划，响应体不会被使用
    async fn schedule_download(
        &self,
        endpoint: &Url,
        request: &DownloadRequest,
    ) -> Result<(), ApiError>;

    async fn query_downloads(&self) -> Result<Vec<QueueEntry>, ApiError>;

    async fn populate_apps(&self) -> Result<PopulateResult, ApiError>;
}
