mod state;

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

pub use state::{LoginPhase, LoginState, RevealedFactors, SecondFactorKind};

use crate::common::api::error::ApiError;
use crate::common::api::models::{LoginRequest, LoginTarget, LoginVerdict};
use crate::common::api::transport::SteamerApi;
use crate::common::message_log::MessageLog;

pub const LOGIN_SUCCESS_NOTICE: &str = "Login successful!";

/// 登录表单的当前输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub two_factor_code: String,
    pub email_code: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn set_code(&mut self, kind: SecondFactorKind, code: impl Into<String>) {
        match kind {
            SecondFactorKind::TwoFactor => self.two_factor_code = code.into(),
            SecondFactorKind::EmailCode => self.email_code = code.into(),
        }
    }

    // 不做非空校验，原样交给服务器判断
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            two_factor_code: self.two_factor_code.clone(),
            email_code: self.email_code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 登录成功：提示一次并跳转到站点根目录
    Authenticated { notice: &'static str, redirect: Url },
    Rejected { target: LoginTarget, reason: String },
}

pub struct LoginController {
    api: Arc<dyn SteamerApi>,
    form: LoginForm,
    state: LoginState,
    log: MessageLog,
}

impl LoginController {
    pub fn new(api: Arc<dyn SteamerApi>) -> Self {
        Self {
            api,
            form: LoginForm::default(),
            state: LoginState::new(),
            log: MessageLog::new(),
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LoginForm {
        &mut self.form
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// 提交当前表单。网络失败时返回错误，视图状态保持不变。
    pub async fn submit(&mut self) -> Result<LoginOutcome, ApiError> {
        let request = self.form.to_request();
        debug!("提交登录请求");

        let result = self.api.login(&request).await.map_err(|e| {
            warn!("登录请求失败: {}", e);
            e
        })?;

        Ok(self.apply(result.into()))
    }

    /// 根据服务器结果推进状态机。登录成功后视图不再变化，之后的拒绝不写入日志。
    pub fn apply(&mut self, verdict: LoginVerdict) -> LoginOutcome {
        let was_authenticated = self.state.is_authenticated();
        self.state.on_submit();

        match verdict {
            LoginVerdict::Success => {
                info!("登录成功");
                self.state.on_success();
                LoginOutcome::Authenticated {
                    notice: LOGIN_SUCCESS_NOTICE,
                    redirect: self.api.origin().clone(),
                }
            }
            LoginVerdict::Rejected { target, reason } => {
                debug!("登录被拒绝: {:?}", target);
                if was_authenticated {
                    warn!("已登录，忽略拒绝结果: {}", reason);
                    return LoginOutcome::Rejected { target, reason };
                }
                self.log.append(reason.clone());
                self.state.on_rejected(target);
                LoginOutcome::Rejected { target, reason }
            }
        }
    }
}
