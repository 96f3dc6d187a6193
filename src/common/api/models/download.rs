use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST <page>/download 的请求体
///
/// 时、分保持用户输入的原样字符串（"09" 不会变成 9）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub start_hour: String,
    pub start_min: String,
    pub end_hour: String,
    pub end_min: String,
    pub app_id: u64,
}

/// GET /api/v1/query_downloads 的响应，data 为 [app_id, 是否正在下载] 数组
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadQueueResponse {
    #[serde(default)]
    pub data: Vec<(Value, Value)>,
}

pub const STATE_DOWNLOADING: &str = "downloading";
pub const STATE_IDLE: &str = "idle";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub app_id: String,
    pub state: String,
}

impl From<DownloadQueueResponse> for Vec<QueueEntry> {
    fn from(resp: DownloadQueueResponse) -> Self {
        resp.data
            .into_iter()
            .map(|(app_id, state)| QueueEntry {
                // 服务端可能以字符串或数字返回 app_id
                app_id: value_text(app_id),
                state: match state {
                    Value::Bool(true) => STATE_DOWNLOADING.to_string(),
                    Value::Bool(false) => STATE_IDLE.to_string(),
                    other => value_text(other),
                },
            })
            .collect()
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// GET /api/v1/populate 的响应
#[derive(Debug, Clone, Deserialize)]
pub struct PopulateResult {
    #[serde(default)]
    pub done: bool,
}
