//! DNS-01 挑战记录的生命周期管理

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{ChallengeError, ChallengeResult};
use crate::resolver::resolve_base_domain;
use crate::traits::DnsProvider;
use crate::types::CreateDnsRecordRequest;

/// 挑战记录的 TTL（秒）
const CHALLENGE_TTL: u32 = 600;
/// 挑战记录的类型
const TXT_RECORD_TYPE: &str = "TXT";

/// setup 成功后登记的清理信息
#[derive(Debug, Clone)]
struct CleanupEntry {
    zone: String,
    record_id: String,
}

/// DNS-01 挑战管理器
///
/// `setup` 写入验证用的 TXT 记录并登记清理信息，`cleanup` 按登记
/// 精确删除。同一验证名重复 `setup` 会先清掉旧记录（幂等）。
pub struct ChallengeManager {
    provider: Arc<dyn DnsProvider>,
    /// validation_name -> 待清理的记录
    cleanup_entries: RwLock<HashMap<String, CleanupEntry>>,
}

impl ChallengeManager {
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>) -> Self {
        Self {
            provider,
            cleanup_entries: RwLock::new(HashMap::new()),
        }
    }

    /// 写入挑战 TXT 记录
    ///
    /// `domain` 是证书覆盖的域名（可带 `*.` 前缀），`validation_name`
    /// 是 CA 要求的完整记录名，`token` 是要写入的记录值。
    pub async fn setup(
        &self,
        domain: &str,
        validation_name: &str,
        token: &str,
    ) -> ChallengeResult<()> {
        log::debug!("Setting up challenge record {validation_name} for {domain}");

        // 通配符证书的验证记录挂在去掉 `*.` 的域名下
        let probe_domain = domain.trim_start_matches("*.");
        let resolved = resolve_base_domain(self.provider.as_ref(), probe_domain).await?;

        let relative_name = relative_record_name(validation_name, &resolved.zone)?;

        self.remove_existing_records(&resolved.zone, &relative_name)
            .await?;

        let request = CreateDnsRecordRequest {
            zone: resolved.zone.clone(),
            name: relative_name,
            record_type: TXT_RECORD_TYPE.to_string(),
            value: token.to_string(),
            ttl: CHALLENGE_TTL,
        };
        let record = self.provider.create_record(&request).await?;

        log::info!(
            "Challenge record {validation_name} created in zone {} (id {})",
            resolved.zone,
            record.id
        );

        self.cleanup_entries.write().await.insert(
            validation_name.to_string(),
            CleanupEntry {
                zone: resolved.zone,
                record_id: record.id,
            },
        );

        Ok(())
    }

    /// 删除 `setup` 留下的挑战记录
    ///
    /// 清理是尽力而为：没有登记直接返回，删除失败只记日志，两种情况
    /// 都不向上报错。`domain` 与 `token` 仅为与 `setup` 保持同一签名，
    /// 定位只靠 `validation_name`。
    pub async fn cleanup(&self, _domain: &str, validation_name: &str, _token: &str) {
        let entry = self.cleanup_entries.write().await.remove(validation_name);

        let Some(entry) = entry else {
            log::warn!(
                "No cleanup entry for {validation_name}, an earlier setup likely failed"
            );
            return;
        };

        match self
            .provider
            .delete_record(&entry.record_id, &entry.zone)
            .await
        {
            Ok(()) => {
                log::info!(
                    "Challenge record {validation_name} removed from zone {} (id {})",
                    entry.zone,
                    entry.record_id
                );
            }
            Err(e) => {
                let err = ChallengeError::Cleanup {
                    zone: entry.zone,
                    record_id: entry.record_id,
                    source: e,
                };
                log::error!("{err}");
            }
        }
    }

    /// 尚未清理的挑战记录数量，宿主可在退出前据此告警
    pub async fn pending_cleanups(&self) -> usize {
        self.cleanup_entries.read().await.len()
    }

    /// 幂等预清理：删除同名的旧挑战记录
    async fn remove_existing_records(&self, zone: &str, relative_name: &str) -> ChallengeResult<()> {
        let records = self.provider.list_records(zone).await?;

        for record in records {
            if record.name != relative_name {
                continue;
            }
            // 同名的非 TXT 记录不是挑战流程留下的，拒绝动它
            if record.record_type != TXT_RECORD_TYPE {
                return Err(ChallengeError::RecordConflict {
                    name: record.name,
                    zone: zone.to_string(),
                    record_type: record.record_type,
                });
            }
            log::debug!(
                "Removing stale challenge record {} (id {}) in zone {zone}",
                record.name,
                record.id
            );
            self.provider.delete_record(&record.id, zone).await?;
        }

        Ok(())
    }
}

/// 把完整验证名换算成 zone 内的相对记录名
fn relative_record_name(validation_name: &str, zone: &str) -> ChallengeResult<String> {
    validation_name
        .strip_suffix(&format!(".{zone}"))
        .map(str::to_string)
        .ok_or_else(|| ChallengeError::Configuration {
            detail: format!("validation name '{validation_name}' is not under zone '{zone}'"),
        })
}
