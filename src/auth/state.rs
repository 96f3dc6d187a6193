use crate::common::api::models::LoginTarget;

/// 需要额外输入的二次验证方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondFactorKind {
    TwoFactor,
    EmailCode,
}

impl SecondFactorKind {
    pub fn from_target(target: LoginTarget) -> Option<Self> {
        match target {
            LoginTarget::TwoFactor => Some(Self::TwoFactor),
            LoginTarget::EmailCode => Some(Self::EmailCode),
            LoginTarget::Password | LoginTarget::Steam | LoginTarget::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TwoFactor => "2FA 验证码",
            Self::EmailCode => "邮箱验证码",
        }
    }
}

// 登录状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    AwaitingCredentials,
    AwaitingSecondFactor(SecondFactorKind),
    Authenticated,
}

/// 两个二次验证输入组是否可见。一旦显示就不会再隐藏。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealedFactors {
    pub two_factor: bool,
    pub email_code: bool,
}

impl RevealedFactors {
    pub fn reveal(&mut self, kind: SecondFactorKind) {
        match kind {
            SecondFactorKind::TwoFactor => self.two_factor = true,
            SecondFactorKind::EmailCode => self.email_code = true,
        }
    }

    pub fn is_visible(&self, kind: SecondFactorKind) -> bool {
        match kind {
            SecondFactorKind::TwoFactor => self.two_factor,
            SecondFactorKind::EmailCode => self.email_code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginState {
    phase: LoginPhase,
    revealed: RevealedFactors,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            phase: LoginPhase::AwaitingCredentials,
            revealed: RevealedFactors::default(),
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn revealed(&self) -> RevealedFactors {
        self.revealed
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == LoginPhase::Authenticated
    }

    /// 重新提交时回到等待凭据状态，已显示的输入组保持可见
    pub fn on_submit(&mut self) {
        if !self.is_authenticated() {
            self.phase = LoginPhase::AwaitingCredentials;
        }
    }

    pub fn on_success(&mut self) {
        self.phase = LoginPhase::Authenticated;
    }

    /// 只有 2fa / email-code 会改变状态；password 和 steam 只记录日志。
    /// 登录成功后不再变化。
    pub fn on_rejected(&mut self, target: LoginTarget) {
        if self.is_authenticated() {
            return;
        }
        if let Some(kind) = SecondFactorKind::from_target(target) {
            self.revealed.reveal(kind);
            self.phase = LoginPhase::AwaitingSecondFactor(kind);
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}
