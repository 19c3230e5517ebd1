//! 腾讯云 `DNSPod` 客户端
//!
//! 覆盖挑战流程用到的三个 API：`DescribeRecordList`、`CreateRecord`、
//! `DeleteRecord`，请求使用 TC3-HMAC-SHA256 签名。

mod error;
mod http;
mod provider;
mod sign;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, ProviderResult};

pub(crate) use types::{CreateRecordResponse, RecordListResponse, TencentError, TencentResponse};

pub(crate) const DNSPOD_API_HOST: &str = "dnspod.tencentcloudapi.com";
pub(crate) const DNSPOD_SERVICE: &str = "dnspod";
pub(crate) const DNSPOD_VERSION: &str = "2021-03-23";
/// `DNSPod` API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;
/// `DNSPod` 默认解析线路
pub(crate) const DEFAULT_RECORD_LINE: &str = "默认";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// 腾讯云 `DNSPod` 客户端
///
/// 构造后不可变，可通过 `Arc` 自由共享。
pub struct DnspodClient {
    pub(crate) client: Client,
    pub(crate) secret_id: String,
    pub(crate) secret_key: String,
}

impl DnspodClient {
    /// 创建客户端，空白凭证直接拒绝
    pub fn new(secret_id: String, secret_key: String) -> ProviderResult<Self> {
        if secret_id.trim().is_empty() || secret_key.trim().is_empty() {
            return Err(ProviderError::InvalidCredentials {
                raw_message: Some("secret_id and secret_key must not be empty".to_string()),
            });
        }

        Ok(Self {
            client: create_http_client(),
            secret_id,
            secret_key,
        })
    }
}
