#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use steamer_client::common::api::models::{
    DownloadRequest, LoginRequest, LoginResult, LoginTarget, PopulateResult, QueueEntry,
    SettingsAck, SettingsSnapshot, SettingsUpdate,
};
use steamer_client::{ApiError, SteamerApi};
use url::Url;

pub const TEST_ORIGIN: &str = "http://steamer.test:5000";

/// 内存中的服务端，记录收到的请求并按脚本返回结果
pub struct FakeApi {
    origin: Url,
    pub login_results: Mutex<VecDeque<LoginResult>>,
    pub login_requests: Mutex<Vec<LoginRequest>>,
    /// None 表示服务不可用
    pub settings: Mutex<Option<SettingsSnapshot>>,
    pub settings_updates: Mutex<Vec<SettingsUpdate>>,
    pub downloads: Mutex<Vec<(Url, DownloadRequest)>>,
    pub queue: Vec<QueueEntry>,
    pub offline: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            origin: Url::parse(TEST_ORIGIN).unwrap(),
            login_results: Mutex::new(VecDeque::new()),
            login_requests: Mutex::new(Vec::new()),
            settings: Mutex::new(None),
            settings_updates: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
            queue: Vec::new(),
            offline: false,
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::new()
        }
    }

    pub fn with_settings(self, snapshot: SettingsSnapshot) -> Self {
        *self.settings.lock().unwrap() = Some(snapshot);
        self
    }

    pub fn push_login(&self, result: LoginResult) {
        self.login_results.lock().unwrap().push_back(result);
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline {
            return Err(ApiError::Status {
                status: 503,
                body: "offline".to_string(),
            });
        }
        Ok(())
    }
}

pub fn into_api(fake: &Arc<FakeApi>) -> Arc<dyn SteamerApi> {
    Arc::clone(fake) as Arc<dyn SteamerApi>
}

pub fn success() -> LoginResult {
    LoginResult {
        success: true,
        target: None,
        reason: None,
    }
}

pub fn rejected(target: LoginTarget, reason: &str) -> LoginResult {
    LoginResult {
        success: false,
        target: Some(target),
        reason: Some(reason.to_string()),
    }
}

#[async_trait]
impl SteamerApi for FakeApi {
    fn origin(&self) -> &Url {
        &self.origin
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResult, ApiError> {
        self.check_online()?;
        self.login_requests.lock().unwrap().push(request.clone());
        self.login_results
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::InvalidResponse("没有预设的登录结果".to_string()))
    }

    async fn fetch_settings(&self) -> Result<SettingsSnapshot, ApiError> {
        self.check_online()?;
        self.settings.lock().unwrap().clone().ok_or(ApiError::Status {
            status: 500,
            body: String::new(),
        })
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<SettingsAck, ApiError> {
        self.check_online()?;
        self.settings_updates.lock().unwrap().push(update.clone());
        Ok(SettingsAck {
            response: "Settings updated.".to_string(),
        })
    }

    async fn schedule_download(
        &self,
        endpoint: &Url,
        request: &DownloadRequest,
    ) -> Result<(), ApiError> {
        self.check_online()?;
        self.downloads
            .lock()
            .unwrap()
            .push((endpoint.clone(), request.clone()));
        Ok(())
    }

    async fn query_downloads(&self) -> Result<Vec<QueueEntry>, ApiError> {
        self.check_online()?;
        Ok(self.queue.clone())
    }

    async fn populate_apps(&self) -> Result<PopulateResult, ApiError> {
        self.check_online()?;
        Ok(PopulateResult { done: true })
    }
}
