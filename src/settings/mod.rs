pub mod tag_list;

use std::sync::Arc;

use tracing::{debug, info, warn};

pub use tag_list::{InputKey, REMOVAL_MARKER, TagEntry, TagList, strip_removal_marker};

use crate::common::api::error::ApiError;
use crate::common::api::models::{SettingsSnapshot, SettingsUpdate};
use crate::common::api::transport::SteamerApi;
use crate::common::config::{SettingsConfig, SettingsMode};
use crate::common::message_log::MessageLog;

pub const SETTINGS_LOADED_MESSAGE: &str = "Got Settings from server!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagListKind {
    Os,
    Languages,
}

/// 设置页的视图模型
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    /// 加载成功之前为 None
    pub download_location: Option<String>,
    pub os_list: TagList,
    pub languages: TagList,
}

pub struct SettingsController {
    api: Arc<dyn SteamerApi>,
    config: SettingsConfig,
    form: SettingsForm,
    log: MessageLog,
}

impl SettingsController {
    pub fn new(api: Arc<dyn SteamerApi>, config: SettingsConfig) -> Self {
        Self {
            api,
            config,
            form: SettingsForm::default(),
            log: MessageLog::new(),
        }
    }

    pub fn mode(&self) -> SettingsMode {
        self.config.mode
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// 页面加载时拉取当前设置。失败时不修改任何字段，也不写日志。
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let snapshot = self.api.fetch_settings().await.map_err(|e| {
            warn!("获取设置失败: {}", e);
            e
        })?;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    fn apply_snapshot(&mut self, snapshot: SettingsSnapshot) {
        debug!("当前下载路径: {}", snapshot.download_location);
        self.form.download_location = Some(snapshot.download_location);

        if self.config.mode == SettingsMode::TagList && self.config.prefill_tag_lists {
            self.form.os_list.replace_all(snapshot.os_list);
            self.form.languages.replace_all(snapshot.languages);
        }

        self.log.append(SETTINGS_LOADED_MESSAGE);
    }

    pub fn set_download_location(&mut self, path: impl Into<String>) {
        self.form.download_location = Some(path.into());
    }

    pub fn tag_list(&self, kind: TagListKind) -> &TagList {
        match kind {
            TagListKind::Os => &self.form.os_list,
            TagListKind::Languages => &self.form.languages,
        }
    }

    pub fn tag_list_mut(&mut self, kind: TagListKind) -> &mut TagList {
        match kind {
            TagListKind::Os => &mut self.form.os_list,
            TagListKind::Languages => &mut self.form.languages,
        }
    }

    /// 根据当前模式构建请求体并校验
    pub fn build_update(&self) -> Result<SettingsUpdate, ApiError> {
        let location = self.form.download_location.clone().unwrap_or_default();
        let update = match self.config.mode {
            SettingsMode::Simple => SettingsUpdate::path_only(location),
            SettingsMode::TagList => SettingsUpdate::with_tags(
                location,
                self.form.os_list.values(),
                self.form.languages.values(),
            ),
        };
        update.validate()?;
        Ok(update)
    }

    /// 提交设置，把服务器的回复追加到消息日志
    pub async fn submit(&mut self) -> Result<String, ApiError> {
        let update = self.build_update()?;
        let ack = self.api.update_settings(&update).await.map_err(|e| {
            warn!("更新设置失败: {}", e);
            e
        })?;
        info!("设置已提交");
        self.log.append(ack.response.clone());
        Ok(ack.response)
    }
}
