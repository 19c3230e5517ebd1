//! `DNSPod` 错误码映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, RawApiError};

/// 把 `DNSPod` 返回的错误码翻译成 [`ProviderError`]
///
/// 错误码参考: <https://cloud.tencent.com/document/api/1427/56192>
pub(super) fn map_error(raw: RawApiError, context: ErrorContext) -> ProviderError {
    match raw.code.as_deref() {
        // ============ Authentication error ============
        Some(
            "AuthFailure"
            | "AuthFailure.InvalidAuthorization"
            | "AuthFailure.InvalidSecretId"
            | "AuthFailure.MFAFailure"
            | "AuthFailure.SecretIdNotFound"
            | "AuthFailure.SignatureExpire"
            | "AuthFailure.SignatureFailure"
            | "AuthFailure.TokenFailure"
            | "AuthFailure.UnauthorizedOperation"
            | "InvalidParameter.InvalidSecretId"
            | "InvalidParameter.InvalidSignature"
            | "InvalidParameter.PermissionDenied"
            | "InvalidParameter.LoginTokenIdError"
            | "InvalidParameter.LoginTokenNotExists"
            | "InvalidParameter.LoginTokenValidateFailed",
        ) => ProviderError::InvalidCredentials {
            raw_message: Some(raw.message),
        },

        // ============ Quota limit (resources run out, no retry) ============
        Some(
            "LimitExceeded"
            | "LimitExceeded.AAAACountLimit"
            | "LimitExceeded.AtNsRecordLimit"
            | "LimitExceeded.CustomLineLimited"
            | "LimitExceeded.DomainAliasCountExceeded"
            | "LimitExceeded.DomainAliasNumberLimit"
            | "LimitExceeded.FailedLoginLimitExceeded"
            | "LimitExceeded.GroupNumberLimit"
            | "LimitExceeded.HiddenUrlExceeded"
            | "LimitExceeded.NsCountLimit"
            | "LimitExceeded.OffsetExceeded"
            | "LimitExceeded.SrvCountLimit"
            | "LimitExceeded.SubdomainLevelLimit"
            | "LimitExceeded.SubdomainRollLimit"
            | "LimitExceeded.SubdomainWcardLimit"
            | "LimitExceeded.UrlCountLimit"
            | "RequestLimitExceeded.GlobalRegionUinLimitExceeded"
            | "RequestLimitExceeded.IPLimitExceeded"
            | "RequestLimitExceeded.UinLimitExceeded"
            | "RequestLimitExceeded.BatchTaskLimit"
            | "RequestLimitExceeded.CreateDomainLimit",
        ) => ProviderError::QuotaExceeded {
            raw_message: Some(raw.message),
        },

        // ============ Frequency limit (temporary limit, can be retried) ============
        Some(
            "RequestLimitExceeded"
            | "RequestLimitExceeded.RequestLimitExceeded"
            | "FailedOperation.FrequencyLimit"
            | "InvalidParameter.OperationIsTooFrequent",
        ) => ProviderError::RateLimited {
            retry_after: None,
            raw_message: Some(raw.message),
        },

        // ============ Record already exists ============
        Some("InvalidParameter.DomainRecordExist") => ProviderError::RecordExists {
            record_name: context
                .record_name
                .unwrap_or_else(|| "<unknown>".to_string()),
            raw_message: Some(raw.message),
        },

        // ============ The domain name does not exist ============
        Some("ResourceNotFound.NoDataOfDomain" | "InvalidParameterValue.DomainNotExists") => {
            ProviderError::DomainNotFound {
                domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            }
        }

        // ============ Domain name is locked/disabled ============
        Some(
            "FailedOperation.DomainIsLocked"
            | "FailedOperation.DomainIsSpam"
            | "FailedOperation.AccountIsLocked"
            | "InvalidParameter.UserAlreadyLocked"
            | "InvalidParameter.DomainIsNotlocked"
            | "InvalidParameter.DomainNotAllowedLock",
        ) => ProviderError::DomainLocked {
            domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
            raw_message: Some(raw.message),
        },

        // ============ Permission/Operation Denied ============
        Some(
            "OperationDenied"
            | "OperationDenied.AccessDenied"
            | "OperationDenied.DomainOwnerAllowedOnly"
            | "OperationDenied.NoPermissionToOperateDomain"
            | "OperationDenied.NotAdmin"
            | "OperationDenied.NotAgent"
            | "OperationDenied.NotGrantedByOwner"
            | "OperationDenied.NotManagedUser"
            | "OperationDenied.NotOrderOwner"
            | "OperationDenied.NotResourceOwner"
            | "OperationDenied.AgentDenied"
            | "OperationDenied.AgentSubordinateDenied"
            | "UnauthorizedOperation"
            | "FailedOperation.NotDomainOwner"
            | "FailedOperation.NotResourceOwner"
            | "FailedOperation.NotBatchTaskOwner"
            | "InvalidParameter.NoAuthorityToSrcDomain"
            | "InvalidParameter.NoAuthorityToTheGroup",
        ) => ProviderError::PermissionDenied {
            raw_message: Some(raw.message),
        },

        // ============ Invalid parameter - line ============
        Some("InvalidParameter.RecordLineInvalid" | "InvalidParameter.LineNotExist") => {
            ProviderError::InvalidParameter {
                param: "line".to_string(),
                detail: raw.message,
            }
        }

        // ============ Invalid parameter - record type ============
        Some("InvalidParameter.RecordTypeInvalid") => ProviderError::InvalidParameter {
            param: "type".to_string(),
            detail: raw.message,
        },

        // ============ Invalid parameter - record value ============
        Some("InvalidParameter.RecordValueInvalid" | "InvalidParameter.RecordValueLengthInvalid") => {
            ProviderError::InvalidParameter {
                param: "value".to_string(),
                detail: raw.message,
            }
        }

        // ============ Invalid parameter - subdomain ============
        Some("InvalidParameter.SubdomainInvalid") => ProviderError::InvalidParameter {
            param: "subdomain".to_string(),
            detail: raw.message,
        },

        // ============ Invalid parameter - TTL ============
        Some("LimitExceeded.RecordTtlLimit") => ProviderError::InvalidParameter {
            param: "ttl".to_string(),
            detail: raw.message,
        },

        // ============ Invalid parameter - MX priority ============
        Some("InvalidParameter.MxInvalid") => ProviderError::InvalidParameter {
            param: "mx".to_string(),
            detail: raw.message,
        },

        // ============ Invalid parameter - domain name ============
        Some(
            "InvalidParameter.DomainIdInvalid"
            | "InvalidParameter.DomainInvalid"
            | "InvalidParameter.DomainTooLong"
            | "InvalidParameter.DomainTypeInvalid",
        ) => ProviderError::InvalidParameter {
            param: "domain".to_string(),
            detail: raw.message,
        },

        // ============ Invalid parameter - record ID ============
        Some("InvalidParameter.RecordIdInvalid") => ProviderError::InvalidParameter {
            param: "record_id".to_string(),
            detail: raw.message,
        },

        // ============ Other errors fallback ============
        _ => unknown_error(raw),
    }
}

/// 兜底：无法识别的错误码
fn unknown_error(raw: RawApiError) -> ProviderError {
    ProviderError::Unknown {
        raw_code: raw.code,
        raw_message: raw.message,
    }
}
