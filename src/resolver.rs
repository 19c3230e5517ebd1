//! 基础域名解析
//!
//! `DNSPod` 的记录接口以 zone（账号托管的基础域名）为单位，而证书
//! 签发方只给出完整域名。这里用后缀探测找出服务商实际托管的 zone。

use crate::error::{ChallengeError, ChallengeResult};
use crate::traits::DnsProvider;
use crate::types::DnsRecord;

/// 后缀探测的命中结果
#[derive(Debug, Clone)]
pub struct ResolvedZone {
    /// 服务商托管的基础域名
    pub zone: String,
    /// 命中时顺带取回的 zone 内记录
    pub records: Vec<DnsRecord>,
}

/// 从 `domain` 的后缀中找出服务商托管的基础域名
///
/// 从两段后缀开始探测，每失败一次向左多取一个 label，直到整个域名。
/// 第一个 `list_records` 成功的候选即为结果；单段输入（裸 TLD）不
/// 发起任何探测，直接失败。
pub async fn resolve_base_domain(
    provider: &dyn DnsProvider,
    domain: &str,
) -> ChallengeResult<ResolvedZone> {
    let labels: Vec<&str> = domain.split('.').collect();
    let mut tried = Vec::new();

    if labels.len() >= 2 {
        for start in (0..=labels.len() - 2).rev() {
            let candidate = labels[start..].join(".");
            log::debug!("Probing zone candidate: {candidate}");

            match provider.list_records(&candidate).await {
                Ok(records) => {
                    log::debug!(
                        "Resolved base domain of {domain}: {candidate} ({} records)",
                        records.len()
                    );
                    return Ok(ResolvedZone {
                        zone: candidate,
                        records,
                    });
                }
                Err(e) => {
                    // 预期内的未命中静默跳过，其余错误留痕后继续探测
                    if e.is_expected() {
                        log::debug!("Zone candidate {candidate} rejected: {e}");
                    } else {
                        log::warn!("Zone candidate {candidate} failed: {e}");
                    }
                    tried.push(candidate);
                }
            }
        }
    }

    Err(ChallengeError::ZoneResolution {
        domain: domain.to_string(),
        tried,
    })
}
