//! 测试辅助模块
//!
//! 提供内存版的 `DnsProvider` mock 和便捷的构造函数。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProviderError, ProviderResult};
use crate::manager::ChallengeManager;
use crate::traits::DnsProvider;
use crate::types::{CreateDnsRecordRequest, DnsRecord};

// ===== MockDnsProvider =====

/// 内存版 DNS 服务商：zone -> 记录列表
///
/// 记录每次调用的参数，便于断言探测顺序和删除目标。
pub struct MockDnsProvider {
    zones: RwLock<HashMap<String, Vec<DnsRecord>>>,
    /// 指定 zone 的 `list_records` 强制返回的错误
    list_errors: RwLock<HashMap<String, ProviderError>>,
    /// 全局 `delete_record` 强制返回的错误
    delete_error: RwLock<Option<ProviderError>>,
    list_calls: RwLock<Vec<String>>,
    delete_calls: RwLock<Vec<(String, String)>>,
    next_id: RwLock<u64>,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(HashMap::new()),
            list_errors: RwLock::new(HashMap::new()),
            delete_error: RwLock::new(None),
            list_calls: RwLock::new(Vec::new()),
            delete_calls: RwLock::new(Vec::new()),
            next_id: RwLock::new(0),
        }
    }

    /// 注册一个托管 zone（可带初始记录）
    pub async fn add_zone(&self, zone: &str, records: Vec<DnsRecord>) {
        self.zones.write().await.insert(zone.to_string(), records);
    }

    /// 让指定 zone 的 `list_records` 返回给定错误
    pub async fn set_list_error(&self, zone: &str, err: ProviderError) {
        self.list_errors.write().await.insert(zone.to_string(), err);
    }

    /// 让之后所有 `delete_record` 返回给定错误（`None` 恢复正常）
    pub async fn set_delete_error(&self, err: Option<ProviderError>) {
        *self.delete_error.write().await = err;
    }

    /// 按调用顺序返回 `list_records` 收到的 zone
    pub async fn list_calls(&self) -> Vec<String> {
        self.list_calls.read().await.clone()
    }

    /// 按调用顺序返回 `delete_record` 收到的 (record_id, zone)
    pub async fn delete_calls(&self) -> Vec<(String, String)> {
        self.delete_calls.read().await.clone()
    }

    /// zone 当前的记录快照
    pub async fn records_in(&self, zone: &str) -> Vec<DnsRecord> {
        self.zones
            .read()
            .await
            .get(zone)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    async fn list_records(&self, zone: &str) -> ProviderResult<Vec<DnsRecord>> {
        self.list_calls.write().await.push(zone.to_string());

        if let Some(err) = self.list_errors.read().await.get(zone) {
            return Err(err.clone());
        }

        match self.zones.read().await.get(zone) {
            Some(records) => Ok(records.clone()),
            None => Err(ProviderError::DomainNotFound {
                domain: zone.to_string(),
                raw_message: None,
            }),
        }
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> ProviderResult<DnsRecord> {
        let mut zones = self.zones.write().await;
        let Some(records) = zones.get_mut(&req.zone) else {
            return Err(ProviderError::DomainNotFound {
                domain: req.zone.clone(),
                raw_message: None,
            });
        };

        let mut next_id = self.next_id.write().await;
        *next_id += 1;
        let id = *next_id;

        let record = DnsRecord {
            id: id.to_string(),
            name: req.name.clone(),
            record_type: req.record_type.clone(),
            value: req.value.clone(),
            ttl: req.ttl,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn delete_record(&self, record_id: &str, zone: &str) -> ProviderResult<()> {
        self.delete_calls
            .write()
            .await
            .push((record_id.to_string(), zone.to_string()));

        if let Some(err) = self.delete_error.read().await.clone() {
            return Err(err);
        }

        let mut zones = self.zones.write().await;
        let Some(records) = zones.get_mut(zone) else {
            return Err(ProviderError::DomainNotFound {
                domain: zone.to_string(),
                raw_message: None,
            });
        };

        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(ProviderError::RecordNotFound {
                record_id: record_id.to_string(),
                raw_message: None,
            });
        }
        Ok(())
    }
}

// ===== 构造函数 =====

/// 构造测试记录（value 和 ttl 用固定值）
pub fn test_record(id: &str, name: &str, record_type: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        value: "test-value".to_string(),
        ttl: 600,
    }
}

/// 创建带若干空 zone 的 manager 与底层 mock
pub async fn manager_with_zones(zones: &[&str]) -> (ChallengeManager, Arc<MockDnsProvider>) {
    let mock = Arc::new(MockDnsProvider::new());
    for zone in zones {
        mock.add_zone(zone, vec![]).await;
    }
    let manager = ChallengeManager::new(mock.clone());
    (manager, mock)
}
