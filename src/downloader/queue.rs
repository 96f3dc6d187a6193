use std::sync::Arc;

use tracing::{debug, info};

use crate::common::api::error::ApiError;
use crate::common::api::models::QueueEntry;
use crate::common::api::transport::SteamerApi;

/// 服务端下载队列的快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadQueue {
    pub entries: Vec<QueueEntry>,
}

impl DownloadQueue {
    pub async fn fetch(api: &Arc<dyn SteamerApi>) -> Result<Self, ApiError> {
        let entries = api.query_downloads().await?;
        debug!("下载队列共 {} 项", entries.len());
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, app_id: &str) -> Option<&QueueEntry> {
        self.entries.iter().find(|entry| entry.app_id == app_id)
    }
}

/// 让服务端重新拉取应用列表，耗时较长
pub async fn populate_apps(api: &Arc<dyn SteamerApi>) -> Result<bool, ApiError> {
    info!("请求服务端刷新应用列表");
    let result = api.populate_apps().await?;
    Ok(result.done)
}
