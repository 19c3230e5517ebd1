//! # acme-dnspod
//!
//! 腾讯云 `DNSPod` 的 DNS-01 挑战核心：为 ACME 宿主框架提供
//! `setup`/`cleanup` 两个固定扩展点，自动完成基础域名探测、
//! 验证 TXT 记录的写入与精确清理。
//!
//! ## 工作流程
//!
//! 1. 从完整域名出发做后缀探测，找出账号实际托管的 zone；
//! 2. `setup` 幂等地写入 `_acme-challenge` TXT 记录并登记记录 ID；
//! 3. CA 验证通过后 `cleanup` 按登记的 `(zone, record_id)` 精确删除。
//!
//! ## Features
//!
//! TLS 后端二选一：
//!
//! - `native-tls`（默认）：使用系统原生 TLS 库
//! - `rustls`：纯 Rust 实现，适合静态链接和交叉编译
//!
//! ```toml
//! [dependencies]
//! acme-dnspod = { version = "0.1", default-features = false, features = ["rustls"] }
//! ```
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use acme_dnspod::{ChallengeManager, Credentials, DnspodClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 凭证：TOML 文件或环境变量
//!     let credentials = Credentials::resolve(None)?;
//!     let client = DnspodClient::new(credentials.secret_id, credentials.secret_key)?;
//!
//!     let manager = ChallengeManager::new(Arc::new(client));
//!     manager
//!         .setup(
//!             "www.example.com",
//!             "_acme-challenge.www.example.com",
//!             "token-from-ca",
//!         )
//!         .await?;
//!     // ... CA 在这里完成 DNS 查询验证 ...
//!     manager
//!         .cleanup(
//!             "www.example.com",
//!             "_acme-challenge.www.example.com",
//!             "token-from-ca",
//!         )
//!         .await;
//!     Ok(())
//! }
//! ```
//!
//! ## 错误模型
//!
//! 服务商层错误统一为 [`ProviderError`]（错误码按家族归一化），挑战
//! 流程错误为 [`ChallengeError`]。两者的 `is_expected` 区分预期内的
//! 未命中（zone 探测失败、幂等删除等）与真正的故障，日志级别据此分级。

mod credentials;
mod dnspod;
mod error;
mod http_client;
mod manager;
mod resolver;
mod traits;
mod types;

#[cfg(test)]
mod test_utils;

// Re-export error types
pub use error::{ChallengeError, ChallengeResult, ProviderError, ProviderResult};

// Re-export the provider contract
pub use traits::DnsProvider;

// Re-export record types
pub use types::{CreateDnsRecordRequest, DnsRecord};

// Re-export lifecycle pieces
pub use credentials::{Credentials, SECRET_ID_ENV, SECRET_KEY_ENV};
pub use dnspod::DnspodClient;
pub use manager::ChallengeManager;
pub use resolver::{ResolvedZone, resolve_base_domain};
