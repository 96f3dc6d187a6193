use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use cookie_store::CookieStore;
use reqwest::{
    Client, ClientBuilder, Response,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use reqwest_cookie_store::CookieStoreMutex;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};
use url::Url;

use super::error::ApiError;
use super::models::{
    DownloadQueueResponse, DownloadRequest, LoginRequest, LoginResult, PopulateResult, QueueEntry,
    SettingsAck, SettingsSnapshot, SettingsUpdate,
};
use super::transport::SteamerApi;

pub const LOGIN_API: &str = "/api/v1/login";
pub const SETTINGS_API: &str = "/api/v1/settings";
pub const SETTINGS_SET_API: &str = "/api/v1/settings/set";
pub const QUERY_DOWNLOADS_API: &str = "/api/v1/query_downloads";
pub const POPULATE_API: &str = "/api/v1/populate";

// 同源客户端，cookie 在多次请求之间保持，和浏览器页面一致
#[derive(Debug, Clone)]
pub struct SteamerClient {
    pub inner: Client,
    pub cookie_store: Arc<CookieStoreMutex>,
    origin: Url,
}

impl SteamerClient {
    /// 创建客户端。`timeout` 为 None 时请求不设超时。
    pub fn new(origin: Url, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let cookie_store = Arc::new(CookieStoreMutex::new(CookieStore::default()));

        let mut builder = ClientBuilder::new()
            .cookie_provider(Arc::clone(&cookie_store))
            .default_headers(Self::get_default_headers());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder.build().map_err(|e| {
            error!("Error creating client: {}", e);
            ApiError::Reqwest(e)
        })?;

        Ok(Self {
            inner,
            cookie_store,
            origin,
        })
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*"));
        headers
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.origin.join(path)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);

        let resp = self.inner.get(url).send().await.map_err(|e| {
            error!("请求失败: {}", e);
            ApiError::Reqwest(e)
        })?;

        Self::handle_response::<T>(resp).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send_json(url, body).await?;
        Self::handle_response::<T>(resp).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Response, ApiError> {
        debug!("POST {}", url);
        // 先序列化，保证发出去的内容与类型定义一致
        let payload = serde_json::to_vec(body)?;

        self.inner
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                error!("请求失败: {}", e);
                ApiError::Reqwest(e)
            })
    }

    async fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str::<T>(&text).map_err(|e| {
            debug!("解析错误: {}", e);
            ApiError::InvalidResponse(format!("解析响应失败: {}. 原始响应: {}", e, text))
        })
    }
}

#[async_trait]
impl SteamerApi for SteamerClient {
    fn origin(&self) -> &Url {
        &self.origin
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResult, ApiError> {
        let url = self.endpoint(LOGIN_API)?;
        self.post_json(url, request).await
    }

    async fn fetch_settings(&self) -> Result<SettingsSnapshot, ApiError> {
        self.get(SETTINGS_API).await
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<SettingsAck, ApiError> {
        let url = self.endpoint(SETTINGS_SET_API)?;
        self.post_json(url, update).await
    }

    async fn schedule_download(
        &self,
        endpoint: &Url,
        request: &DownloadRequest,
    ) -> Result<(), ApiError> {
        let resp = self.send_json(endpoint.clone(), request).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    async fn query_downloads(&self) -> Result<Vec<QueueEntry>, ApiError> {
        let resp: DownloadQueueResponse = self.get(QUERY_DOWNLOADS_API).await?;
        Ok(resp.into())
    }

    async fn populate_apps(&self) -> Result<PopulateResult, ApiError> {
        self.get(POPULATE_API).await
    }
}
