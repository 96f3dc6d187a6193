use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("服务器返回错误状态 {status}: {body}")]
    Status { status: u16, body: String },

    #[error("响应解析失败: {0}")]
    InvalidResponse(String),

    #[error("无效的URL: {0}")]
    InvalidUrl(String),

    #[error("输入校验失败: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

impl ApiError {
    /// 网络层面的失败（连接、状态码），与本地输入错误区分开
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Reqwest(_) | ApiError::Status { .. })
    }
}
