mod common;

use std::sync::Arc;

use common::{FakeApi, TEST_ORIGIN, into_api, rejected, success};
use steamer_client::auth::{
    LOGIN_SUCCESS_NOTICE, LoginController, LoginForm, LoginOutcome, LoginPhase, RevealedFactors,
    SecondFactorKind,
};
use steamer_client::common::api::models::{LoginResult, LoginTarget, LoginVerdict};

fn controller(fake: &Arc<FakeApi>) -> LoginController {
    let mut controller = LoginController::new(into_api(fake));
    *controller.form_mut() = LoginForm::new("gaben", "hunter2");
    controller
}

#[test]
fn test_initial_state_hides_both_groups() {
    let fake = Arc::new(FakeApi::new());
    let controller = controller(&fake);

    assert_eq!(controller.state().phase(), LoginPhase::AwaitingCredentials);
    assert!(!controller.state().revealed().two_factor);
    assert!(!controller.state().revealed().email_code);
    assert!(controller.log().is_empty());
}

#[tokio::test]
async fn test_success_redirects_to_origin_without_log() {
    let fake = Arc::new(FakeApi::new());
    fake.push_login(success());
    let mut controller = controller(&fake);

    let outcome = controller.submit().await.unwrap();

    match outcome {
        LoginOutcome::Authenticated { notice, redirect } => {
            assert_eq!(notice, LOGIN_SUCCESS_NOTICE);
            assert_eq!(redirect.origin().ascii_serialization(), TEST_ORIGIN);
        }
        other => panic!("期望登录成功, 实际: {:?}", other),
    }
    assert!(controller.state().is_authenticated());
    assert!(controller.log().is_empty());
    assert_eq!(controller.state().revealed(), RevealedFactors::default());
}

#[tokio::test]
async fn test_two_factor_target_reveals_only_two_factor_group() {
    let fake = Arc::new(FakeApi::new());
    fake.push_login(rejected(LoginTarget::TwoFactor, "2FA Code Required"));
    let mut controller = controller(&fake);

    controller.submit().await.unwrap();

    let revealed = controller.state().revealed();
    assert!(revealed.two_factor);
    assert!(!revealed.email_code);
    assert_eq!(
        controller.state().phase(),
        LoginPhase::AwaitingSecondFactor(SecondFactorKind::TwoFactor)
    );
    assert_eq!(controller.log().lines(), ["2FA Code Required"]);
}

#[tokio::test]
async fn test_email_target_reveals_only_email_group() {
    let fake = Arc::new(FakeApi::new());
    fake.push_login(rejected(LoginTarget::EmailCode, "Email Code Required"));
    let mut controller = controller(&fake);

    controller.submit().await.unwrap();

    let revealed = controller.state().revealed();
    assert!(revealed.email_code);
    assert!(!revealed.two_factor);
    assert_eq!(
        controller.state().phase(),
        LoginPhase::AwaitingSecondFactor(SecondFactorKind::EmailCode)
    );
}

#[tokio::test]
async fn test_password_and_steam_targets_only_log() {
    for (target, reason) in [
        (LoginTarget::Password, "Bad username or password"),
        (LoginTarget::Steam, "Steam servers are currently dead."),
    ] {
        let fake = Arc::new(FakeApi::new());
        fake.push_login(rejected(target, reason));
        let mut controller = controller(&fake);

        let outcome = controller.submit().await.unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                target,
                reason: reason.to_string()
            }
        );
        assert_eq!(controller.state().revealed(), RevealedFactors::default());
        assert_eq!(controller.state().phase(), LoginPhase::AwaitingCredentials);
        assert_eq!(controller.log().len(), 1);
    }
}

#[tokio::test]
async fn test_revealed_group_stays_visible_after_resubmit() {
    let fake = Arc::new(FakeApi::new());
    fake.push_login(rejected(LoginTarget::EmailCode, "Email Code Required"));
    fake.push_login(rejected(LoginTarget::TwoFactor, "2FA Code Required"));
    fake.push_login(rejected(LoginTarget::Password, "Bad username or password"));
    let mut controller = controller(&fake);

    controller.submit().await.unwrap();
    controller
        .form_mut()
        .set_code(SecondFactorKind::EmailCode, "ABCDE");
    controller.submit().await.unwrap();

    // 邮箱输入组在 2fa 之后依然可见
    let revealed = controller.state().revealed();
    assert!(revealed.email_code);
    assert!(revealed.two_factor);

    controller.submit().await.unwrap();
    assert_eq!(controller.state().phase(), LoginPhase::AwaitingCredentials);
    assert!(controller.state().revealed().email_code);
    assert!(controller.state().revealed().two_factor);
    assert_eq!(controller.log().len(), 3);

    let requests = fake.login_requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].email_code, "");
    assert_eq!(requests[1].email_code, "ABCDE");
    assert_eq!(requests[1].two_factor_code, "");
}

#[tokio::test]
async fn test_transport_failure_leaves_view_untouched() {
    let fake = Arc::new(FakeApi::offline());
    let mut controller = controller(&fake);

    let result = controller.submit().await;

    assert!(result.unwrap_err().is_transport());
    assert_eq!(controller.state().phase(), LoginPhase::AwaitingCredentials);
    assert_eq!(controller.state().revealed(), RevealedFactors::default());
    assert!(controller.log().is_empty());
}

#[test]
fn test_request_body_uses_wire_field_names() {
    let mut form = LoginForm::new("gaben", "hunter2");
    form.set_code(SecondFactorKind::TwoFactor, "12345");

    let body = serde_json::to_value(form.to_request()).unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "username": "gaben",
            "password": "hunter2",
            "2fa": "12345",
            "email-code": ""
        })
    );
}

#[test]
fn test_empty_credentials_are_not_rejected_locally() {
    let body = serde_json::to_value(LoginForm::default().to_request()).unwrap();
    assert_eq!(body["username"], "");
    assert_eq!(body["password"], "");
}

#[test]
fn test_login_result_parsing() {
    let ok: LoginResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert_eq!(LoginVerdict::from(ok), LoginVerdict::Success);

    let failed: LoginResult = serde_json::from_str(
        r#"{"success": false, "reason": "Bad Email Code", "target": "email-code"}"#,
    )
    .unwrap();
    assert_eq!(
        LoginVerdict::from(failed),
        LoginVerdict::Rejected {
            target: LoginTarget::EmailCode,
            reason: "Bad Email Code".to_string()
        }
    );

    let unknown: LoginResult =
        serde_json::from_str(r#"{"success": false, "reason": "?", "target": "captcha"}"#).unwrap();
    assert_eq!(unknown.target, Some(LoginTarget::Unknown));
}

#[test]
fn test_unknown_target_behaves_like_password() {
    let fake = Arc::new(FakeApi::new());
    let mut controller = controller(&fake);

    controller.apply(LoginVerdict::Rejected {
        target: LoginTarget::Unknown,
        reason: "Something else".to_string(),
    });

    assert_eq!(controller.state().revealed(), RevealedFactors::default());
    assert_eq!(controller.log().last(), Some("Something else"));
}

#[test]
fn test_authenticated_state_is_terminal() {
    let fake = Arc::new(FakeApi::new());
    let mut controller = controller(&fake);

    controller.apply(LoginVerdict::Success);
    let outcome = controller.apply(LoginVerdict::Rejected {
        target: LoginTarget::TwoFactor,
        reason: "2FA Code Required".to_string(),
    });

    assert!(matches!(outcome, LoginOutcome::Rejected { .. }));
    assert_eq!(controller.state().phase(), LoginPhase::Authenticated);
    assert_eq!(controller.state().revealed(), RevealedFactors::default());
    assert!(controller.log().is_empty());
}
