//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use acme_dnspod::{ChallengeManager, DnspodClient, SECRET_ID_ENV, SECRET_KEY_ENV};

/// 跳过测试的宏（当凭证环境变量未设置时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($ctx:expr) => {
        match $ctx {
            Some(ctx) => ctx,
            None => {
                eprintln!(
                    "Skipping: TENCENTCLOUD_SECRET_ID / TENCENTCLOUD_SECRET_KEY / ACME_TEST_DOMAIN not set"
                );
                return;
            }
        }
    };
}

/// 断言 `Result` 为 `Ok` 并取出值，否则 panic 打印错误
#[macro_export]
macro_rules! require_ok {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(v) => v,
            Err(e) => panic!("{}: {e:?}", $msg),
        }
    };
}

/// 断言 `Option` 为 `Some` 并取出值
#[macro_export]
macro_rules! require_some {
    ($option:expr, $msg:expr) => {
        match $option {
            Some(v) => v,
            None => panic!("{}", $msg),
        }
    };
}

/// 测试上下文：客户端、管理器和测试域名
pub struct TestContext {
    pub provider: Arc<DnspodClient>,
    pub manager: ChallengeManager,
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建，任一变量缺失返回 `None`
    pub fn from_env() -> Option<Self> {
        let secret_id = env::var(SECRET_ID_ENV).ok()?;
        let secret_key = env::var(SECRET_KEY_ENV).ok()?;
        let domain = env::var("ACME_TEST_DOMAIN").ok()?;

        let provider = Arc::new(DnspodClient::new(secret_id, secret_key).ok()?);
        let manager = ChallengeManager::new(provider.clone());

        Some(Self {
            provider,
            manager,
            domain,
        })
    }

    /// 生成唯一的 (domain, validation_name) 组合，避免测试间相互污染
    pub fn test_names(&self) -> (String, String) {
        let uuid = uuid::Uuid::new_v4();
        let domain = format!("rstest-{}.{}", &uuid.to_string()[..8], self.domain);
        let validation_name = format!("_acme-challenge.{domain}");
        (domain, validation_name)
    }
}
