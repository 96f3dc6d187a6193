use url::Url;

use crate::common::api::error::ApiError;

/// 应用页面的路径前缀，例如 `/app/440`
pub const APP_PAGE_PREFIX: &str = "/app/";

/// 从页面地址的最后一个非空路径段解析 app id，末尾的 `/` 不影响结果
pub fn app_id_from_url(page: &Url) -> Result<u64, ApiError> {
    let segment = page
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| ApiError::InvalidUrl(format!("页面地址中没有 app id: {}", page)))?;

    segment
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidUrl(format!("无法解析 app id {:?}: {}", segment, page)))
}

/// 当前页面下的 `/download` 地址，忽略查询参数和锚点
pub fn download_endpoint(page: &Url) -> Result<Url, ApiError> {
    if page.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(page.to_string()));
    }
    let mut endpoint = page.clone();
    let path = format!("{}/download", page.path().trim_end_matches('/'));
    endpoint.set_path(&path);
    endpoint.set_query(None);
    endpoint.set_fragment(None);
    Ok(endpoint)
}

/// 根据站点地址和 app id 拼出应用页面地址
pub fn app_page_url(origin: &Url, app_id: u64) -> Result<Url, ApiError> {
    Ok(origin.join(&format!("{}{}", APP_PAGE_PREFIX, app_id))?)
}
