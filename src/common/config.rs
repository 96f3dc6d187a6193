use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "steamer.json";
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件失败 {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("配置文件格式错误 {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("无效的服务地址: {0}")]
    InvalidOrigin(String),
}

/// 设置页的两种形态：只改路径，或者带 OS/语言标签列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsMode {
    #[default]
    Simple,
    TagList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub mode: SettingsMode,
    /// 加载设置时是否用服务器上的列表填充标签
    pub prefill_tag_lists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub origin: String,
    pub timeout_secs: Option<u64>,
    pub settings: SettingsConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            timeout_secs: None,
            settings: SettingsConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("已加载配置文件: {:?}", path);
        Ok(config)
    }

    /// 显式指定的文件必须存在；默认文件不存在时使用内置默认值
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    debug!("未找到 {}，使用默认配置", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// 只保留 scheme/host/port，路径部分会被忽略
    pub fn origin_url(&self) -> Result<Url, ConfigError> {
        let parsed = Url::parse(&self.origin)
            .map_err(|e| ConfigError::InvalidOrigin(format!("{}: {}", self.origin, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidOrigin(format!(
                "{}: 只支持 http/https",
                self.origin
            )));
        }
        let origin = parsed.origin().ascii_serialization();
        Url::parse(&origin).map_err(|e| ConfigError::InvalidOrigin(e.to_string()))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
