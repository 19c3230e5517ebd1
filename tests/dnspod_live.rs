//! `DNSPod` 挑战流程集成测试
//!
//! 需要真实的腾讯云凭证和一个托管在 `DNSPod` 的测试域名，默认跳过。
//! 运行方式:
//!
//! ```bash
//! TENCENTCLOUD_SECRET_ID=xxx TENCENTCLOUD_SECRET_KEY=xxx ACME_TEST_DOMAIN=example.com \
//!     cargo test --test dnspod_live -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use acme_dnspod::{DnsProvider, resolve_base_domain};
use common::TestContext;

#[tokio::test]
#[ignore]
async fn live_resolve_base_domain() {
    let ctx = skip_if_no_credentials!(TestContext::from_env());

    let resolved = require_ok!(
        resolve_base_domain(ctx.provider.as_ref(), &format!("sub.{}", ctx.domain)).await,
        "resolve_base_domain failed"
    );

    assert_eq!(resolved.zone, ctx.domain);
}

#[tokio::test]
#[ignore]
async fn live_list_records() {
    let ctx = skip_if_no_credentials!(TestContext::from_env());

    let records = require_ok!(
        ctx.provider.list_records(&ctx.domain).await,
        "list_records failed"
    );
    eprintln!("zone {} has {} records", ctx.domain, records.len());
}

#[tokio::test]
#[ignore]
async fn live_challenge_lifecycle() {
    let ctx = skip_if_no_credentials!(TestContext::from_env());
    let (domain, validation_name) = ctx.test_names();
    let token = "acme-dnspod-live-test-token";

    require_ok!(
        ctx.manager.setup(&domain, &validation_name, token).await,
        "setup failed"
    );

    // 验证记录已写入
    let records = require_ok!(
        ctx.provider.list_records(&ctx.domain).await,
        "list_records failed"
    );
    let relative = validation_name
        .strip_suffix(&format!(".{}", ctx.domain))
        .unwrap();
    let created = require_some!(
        records.iter().find(|r| r.name == relative && r.value == token),
        "challenge record not found after setup"
    );
    assert_eq!(created.record_type, "TXT");
    assert_eq!(ctx.manager.pending_cleanups().await, 1);

    ctx.manager.cleanup(&domain, &validation_name, token).await;

    // 验证记录已删除
    let records = require_ok!(
        ctx.provider.list_records(&ctx.domain).await,
        "list_records failed"
    );
    assert!(
        records.iter().all(|r| r.name != relative),
        "challenge record still present after cleanup"
    );
    assert_eq!(ctx.manager.pending_cleanups().await, 0);
}

/// 手动清理历史测试残留（不做断言）
#[tokio::test]
#[ignore]
async fn live_cleanup_residue() {
    let ctx = skip_if_no_credentials!(TestContext::from_env());

    let records = require_ok!(
        ctx.provider.list_records(&ctx.domain).await,
        "list_records failed"
    );
    for record in records {
        if record.record_type == "TXT" && record.name.starts_with("_acme-challenge.rstest-") {
            eprintln!("Deleting residue record {} ({})", record.name, record.id);
            let _ = ctx.provider.delete_record(&record.id, &ctx.domain).await;
        }
    }
}
