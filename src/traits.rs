use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::types::{CreateDnsRecordRequest, DnsRecord};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（传输层错误时为 None）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录名称（用于 `RecordExists` 等错误）
    pub record_name: Option<String>,
    /// 域名（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

/// DNS 提供商 Trait
///
/// 解析器与挑战管理器只依赖此接口（`Arc<dyn DnsProvider>`），
/// 测试时可替换为内存实现。
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 获取 zone 下的全部 DNS 记录（自动翻页，直到服务端报告的总数）
    async fn list_records(&self, zone: &str) -> ProviderResult<Vec<DnsRecord>>;

    /// 创建 DNS 记录，返回含服务商分配 ID 的完整记录
    async fn create_record(&self, req: &CreateDnsRecordRequest) -> ProviderResult<DnsRecord>;

    /// 删除 DNS 记录
    async fn delete_record(&self, record_id: &str, zone: &str) -> ProviderResult<()>;
}
