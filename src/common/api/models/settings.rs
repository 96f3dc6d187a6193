use serde::{Deserialize, Serialize};

use crate::common::api::error::ApiError;

/// GET /api/v1/settings 的响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsSnapshot {
    pub download_location: String,
    #[serde(default)]
    pub os_list: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// POST /api/v1/settings/set 的请求体
///
/// 简单模式下只包含 download_location。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsUpdate {
    pub download_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl SettingsUpdate {
    pub fn path_only(download_location: impl Into<String>) -> Self {
        Self {
            download_location: download_location.into(),
            os_list: None,
            languages: None,
        }
    }

    pub fn with_tags(
        download_location: impl Into<String>,
        os_list: Vec<String>,
        languages: Vec<String>,
    ) -> Self {
        Self {
            download_location: download_location.into(),
            os_list: Some(os_list),
            languages: Some(languages),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.download_location.trim().is_empty() {
            return Err(ApiError::Validation("下载路径不能为空".to_string()));
        }
        let tags = self.os_list.iter().chain(self.languages.iter()).flatten();
        for tag in tags {
            if tag.trim().is_empty() {
                return Err(ApiError::Validation("过滤标签不能为空".to_string()));
            }
        }
        Ok(())
    }
}

/// 设置更新后服务器的回复
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsAck {
    pub response: String,
}
