//! `DNSPod` 的 `DnsProvider` 实现

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{CreateDnsRecordRequest, DnsRecord};

use super::{
    CreateRecordResponse, DEFAULT_RECORD_LINE, DnspodClient, MAX_PAGE_SIZE, RecordListResponse,
};

/// 合并一页 `DescribeRecordList` 结果，返回 (服务端总数, 本页条数)
fn merge_record_page(records: &mut Vec<DnsRecord>, data: RecordListResponse) -> (usize, usize) {
    let total = data
        .record_count_info
        .and_then(|info| info.total_count)
        .unwrap_or(0) as usize;

    let page = data.record_list.unwrap_or_default();
    let page_len = page.len();

    records.extend(page.into_iter().map(|r| DnsRecord {
        id: r.record_id.to_string(),
        name: r.name,
        record_type: r.record_type,
        value: r.value,
        ttl: r.ttl,
    }));

    (total, page_len)
}

/// `DescribeRecordList` 对"域名存在但无记录"返回 `ResourceNotFound.NoDataOfRecord`，
/// 该码等价于空列表而非错误
fn is_empty_zone_error(err: &ProviderError) -> bool {
    matches!(
        err,
        ProviderError::Unknown { raw_code, .. }
            if raw_code.as_deref() == Some("ResourceNotFound.NoDataOfRecord")
    )
}

#[async_trait]
impl DnsProvider for DnspodClient {
    async fn list_records(&self, zone: &str) -> ProviderResult<Vec<DnsRecord>> {
        #[derive(Serialize)]
        struct DescribeRecordListRequest<'a> {
            #[serde(rename = "Domain")]
            domain: &'a str,
            #[serde(rename = "Offset")]
            offset: u32,
            #[serde(rename = "Limit")]
            limit: u32,
        }

        let mut records: Vec<DnsRecord> = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let req = DescribeRecordListRequest {
                domain: zone,
                offset,
                limit: MAX_PAGE_SIZE,
            };
            let ctx = ErrorContext {
                domain: Some(zone.to_string()),
                ..Default::default()
            };

            let response: ProviderResult<RecordListResponse> =
                self.request("DescribeRecordList", &req, ctx).await;

            let data = match response {
                Ok(data) => data,
                Err(ref e) if is_empty_zone_error(e) => break,
                Err(e) => return Err(e),
            };

            let (total, page_len) = merge_record_page(&mut records, data);
            offset += page_len as u32;

            log::debug!("Fetched {}/{total} records in zone {zone}", records.len());

            // 空页兜底，防止 TotalCount 虚报导致死循环
            if records.len() >= total || page_len == 0 {
                break;
            }
        }

        Ok(records)
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> ProviderResult<DnsRecord> {
        #[derive(Serialize)]
        struct CreateRecordRequest<'a> {
            #[serde(rename = "Domain")]
            domain: &'a str,
            #[serde(rename = "SubDomain")]
            sub_domain: &'a str,
            #[serde(rename = "RecordType")]
            record_type: &'a str,
            #[serde(rename = "RecordLine")]
            record_line: &'a str,
            #[serde(rename = "Value")]
            value: &'a str,
            #[serde(rename = "TTL")]
            ttl: u32,
        }

        let api_req = CreateRecordRequest {
            domain: &req.zone,
            sub_domain: &req.name,
            record_type: &req.record_type,
            record_line: DEFAULT_RECORD_LINE,
            value: &req.value,
            ttl: req.ttl,
        };
        let ctx = ErrorContext {
            record_name: Some(req.name.clone()),
            domain: Some(req.zone.clone()),
            ..Default::default()
        };

        let response: CreateRecordResponse = self.request("CreateRecord", &api_req, ctx).await?;

        Ok(DnsRecord {
            id: response.record_id.to_string(),
            name: req.name.clone(),
            record_type: req.record_type.clone(),
            value: req.value.clone(),
            ttl: req.ttl,
        })
    }

    async fn delete_record(&self, record_id: &str, zone: &str) -> ProviderResult<()> {
        #[derive(Serialize)]
        struct DeleteRecordRequest<'a> {
            #[serde(rename = "Domain")]
            domain: &'a str,
            #[serde(rename = "RecordId")]
            record_id: u64,
        }

        #[derive(Deserialize)]
        struct DeleteRecordResponse {}

        // DNSPod 的记录 ID 是数字，非数字 ID 不可能存在
        let record_id_num: u64 =
            record_id
                .parse()
                .map_err(|_| ProviderError::RecordNotFound {
                    record_id: record_id.to_string(),
                    raw_message: None,
                })?;

        let api_req = DeleteRecordRequest {
            domain: zone,
            record_id: record_id_num,
        };
        let ctx = ErrorContext {
            domain: Some(zone.to_string()),
            ..Default::default()
        };

        let _response: DeleteRecordResponse = self.request("DeleteRecord", &api_req, ctx).await?;

        Ok(())
    }
}
