use serde::{Deserialize, Serialize};

/// POST /api/v1/login 的请求体
///
/// 两个二次验证字段总是发送，未使用时为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "2fa")]
    pub two_factor_code: String,
    #[serde(rename = "email-code")]
    pub email_code: String,
}

/// 登录失败时服务器指出的问题字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LoginTarget {
    Password,
    EmailCode,
    TwoFactor,
    Steam,
    Unknown,
}

impl From<String> for LoginTarget {
    fn from(value: String) -> Self {
        match value.as_str() {
            "password" => Self::Password,
            "email-code" => Self::EmailCode,
            "2fa" => Self::TwoFactor,
            "steam" => Self::Steam,
            _ => Self::Unknown,
        }
    }
}

/// 服务器返回的原始登录结果
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResult {
    pub success: bool,
    #[serde(default)]
    pub target: Option<LoginTarget>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// 类型化后的登录结果，target 只在失败时存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginVerdict {
    Success,
    Rejected { target: LoginTarget, reason: String },
}

impl From<LoginResult> for LoginVerdict {
    fn from(result: LoginResult) -> Self {
        if result.success {
            return LoginVerdict::Success;
        }
        LoginVerdict::Rejected {
            target: result.target.unwrap_or(LoginTarget::Unknown),
            reason: result.reason.unwrap_or_default(),
        }
    }
}
