//! `DNSPod` HTTP 请求方法

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, RawApiError};

use super::error::map_error;
use super::{DNSPOD_API_HOST, DNSPOD_VERSION, DnspodClient, TencentError, TencentResponse};

impl DnspodClient {
    /// 执行腾讯云 API 请求
    pub(super) async fn request<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        action: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> ProviderResult<T> {
        // 1. 序列化请求体
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                detail: e.to_string(),
            })?;

        log::debug!("Request Body: {payload}");

        // 2. 生成签名
        let timestamp = Utc::now().timestamp();
        let authorization = self.sign(action, &payload, timestamp);

        // 3. 发送请求
        let url = format!("https://{DNSPOD_API_HOST}");
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Host", DNSPOD_API_HOST)
            .header("X-TC-Action", action)
            .header("X-TC-Version", DNSPOD_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(payload);

        let (_status, response_text) =
            HttpUtils::execute_request(request, "POST", &format!("Action: {action}")).await?;

        // 4. 解包响应信封
        parse_envelope(&response_text, ctx)
    }
}

/// 解包腾讯云响应信封
///
/// 先探测 `Error` 对象，干净的响应才解析成动作对应的数据类型。
/// `Response` 内的其余字段（如 `RequestId`）被忽略。
fn parse_envelope<T: DeserializeOwned>(response_text: &str, ctx: ErrorContext) -> ProviderResult<T> {
    let envelope: TencentResponse = HttpUtils::parse_json(response_text)?;

    if let Some(error_value) = envelope.response.get("Error") {
        let error: TencentError =
            serde_json::from_value(error_value.clone()).map_err(|e| ProviderError::ParseError {
                detail: format!("Malformed error object: {e}"),
            })?;

        // 预期内的错误（zone 探测未命中等）降级为 debug
        let mapped = map_error(RawApiError::with_code(&error.code, &error.message), ctx);
        if mapped.is_expected() {
            log::debug!("API error: {} - {}", error.code, error.message);
        } else {
            log::error!("API error: {} - {}", error.code, error.message);
        }
        return Err(mapped);
    }

    serde_json::from_value(envelope.response).map_err(|e| ProviderError::ParseError {
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnspod::{CreateRecordResponse, RecordListResponse};

    fn ctx() -> ErrorContext {
        ErrorContext::default()
    }

    #[test]
    fn parse_envelope_extracts_data() {
        let body = r#"{
            "Response": {
                "RequestId": "abc-123",
                "RecordCountInfo": { "TotalCount": 1 },
                "RecordList": [
                    { "RecordId": 42, "Name": "_acme-challenge", "Type": "TXT", "Value": "token", "TTL": 600 }
                ]
            }
        }"#;

        let data: RecordListResponse = parse_envelope(body, ctx()).unwrap();
        let records = data.record_list.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_id, 42);
        assert_eq!(records[0].name, "_acme-challenge");
        assert_eq!(records[0].record_type, "TXT");
        assert_eq!(data.record_count_info.unwrap().total_count, Some(1));
    }

    #[test]
    fn parse_envelope_maps_api_error() {
        let body = r#"{
            "Response": {
                "RequestId": "abc-123",
                "Error": { "Code": "ResourceNotFound.NoDataOfDomain", "Message": "domain not found" }
            }
        }"#;

        let ctx = ErrorContext {
            domain: Some("example.com".to_string()),
            ..Default::default()
        };
        let err = parse_envelope::<RecordListResponse>(body, ctx).unwrap_err();
        assert!(
            matches!(err, ProviderError::DomainNotFound { ref domain, .. } if domain == "example.com"),
            "expected DomainNotFound, got {err:?}"
        );
    }

    #[test]
    fn parse_envelope_keeps_raw_code_for_unknown_errors() {
        let body = r#"{
            "Response": {
                "Error": { "Code": "ResourceNotFound.NoDataOfRecord", "Message": "no records" }
            }
        }"#;

        let err = parse_envelope::<RecordListResponse>(body, ctx()).unwrap_err();
        assert!(
            matches!(err, ProviderError::Unknown { ref raw_code, .. } if raw_code.as_deref() == Some("ResourceNotFound.NoDataOfRecord")),
            "expected Unknown with raw_code, got {err:?}"
        );
    }

    #[test]
    fn parse_envelope_rejects_missing_fields() {
        let body = r#"{ "Response": { "RequestId": "abc-123" } }"#;

        let err = parse_envelope::<CreateRecordResponse>(body, ctx()).unwrap_err();
        assert!(
            matches!(err, ProviderError::ParseError { .. }),
            "expected ParseError, got {err:?}"
        );
    }

    #[test]
    fn parse_envelope_rejects_invalid_json() {
        let err = parse_envelope::<RecordListResponse>("not json", ctx()).unwrap_err();
        assert!(matches!(err, ProviderError::ParseError { .. }));
    }
}
