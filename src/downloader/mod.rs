use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::common::api::error::ApiError;
use crate::common::api::models::DownloadRequest;
use crate::common::api::transport::SteamerApi;

pub mod app_path;
pub mod queue;
pub mod time_window;

pub use app_path::{app_id_from_url, app_page_url, download_endpoint};
pub use queue::{DownloadQueue, populate_apps};
pub use time_window::{TimeOfDay, TimeWindow};

/// 下载页表单：开始、结束时间，格式 `HH:MM`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadForm {
    pub start_time: String,
    pub end_time: String,
}

pub struct DownloadController {
    api: Arc<dyn SteamerApi>,
    page_url: Url,
    form: DownloadForm,
}

impl DownloadController {
    pub fn new(api: Arc<dyn SteamerApi>, page_url: Url) -> Self {
        Self {
            api,
            page_url,
            form: DownloadForm::default(),
        }
    }

    /// 以站点下的 `/app/<app_id>` 作为当前页面
    pub fn for_app(api: Arc<dyn SteamerApi>, app_id: u64) -> Result<Self, ApiError> {
        let page_url = app_page_url(api.origin(), app_id)?;
        Ok(Self::new(api, page_url))
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub fn form_mut(&mut self) -> &mut DownloadForm {
        &mut self.form
    }

    pub fn window(&self) -> Result<TimeWindow, ApiError> {
        TimeWindow::parse(&self.form.start_time, &self.form.end_time)
    }

    /// 构建请求体和目标地址，时间在解析时已校验，失败时不会发出任何请求
    pub fn build_request(&self) -> Result<(Url, DownloadRequest), ApiError> {
        let window = self.window()?;
        let app_id = app_id_from_url(&self.page_url)?;
        let endpoint = download_endpoint(&self.page_url)?;

        let request = DownloadRequest {
            start_hour: window.start.hour,
            start_min: window.start.minute,
            end_hour: window.end.hour,
            end_min: window.end.minute,
            app_id,
        };
        Ok((endpoint, request))
    }

    /// 发出下载计划请求后立即返回，结果只写入 tracing 日志
    pub fn submit(&self) -> Result<JoinHandle<()>, ApiError> {
        let (endpoint, request) = self.build_request()?;
        let api = Arc::clone(&self.api);

        debug!("计划下载 app {} -> {}", request.app_id, endpoint);
        Ok(tokio::spawn(async move {
            match api.schedule_download(&endpoint, &request).await {
                Ok(()) => debug!("下载计划已发送: app {}", request.app_id),
                Err(e) => warn!("下载计划发送失败: {}", e),
            }
        }))
    }
}
