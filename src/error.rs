use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============ ProviderError ============

/// Unified error type for all DNS provider operations.
///
/// Each variant carries the context needed to act on the failure, plus the
/// original API message where one exists. All variants are serializable for
/// structured error reporting.
///
/// No operation retries internally: transient variants such as
/// [`NetworkError`](Self::NetworkError) and [`RateLimited`](Self::RateLimited)
/// surface after a single attempt and the caller decides what to do.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, upstream 5xx, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The provided credentials are invalid, empty or expired.
    InvalidCredentials {
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A DNS record with the same name/type/value already exists.
    RecordExists {
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified DNS record was not found.
    RecordNotFound {
        /// ID of the record that was not found.
        record_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (e.g., bad TTL value, malformed
    /// subdomain).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The account's resource quota has been exceeded.
    ///
    /// Unlike [`RateLimited`](Self::RateLimited), this is not a transient
    /// condition.
    QuotaExceeded {
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    ///
    /// Unlike [`QuotaExceeded`](Self::QuotaExceeded), the request should
    /// succeed after waiting.
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The specified domain/zone is not hosted by this account.
    ///
    /// During base-domain probing this is the normal "keep trying the next
    /// candidate" signal, not a failure.
    DomainNotFound {
        /// Domain name that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The domain is locked or disabled and cannot be modified.
    DomainLocked {
        /// Domain name that is locked.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested operation.
    PermissionDenied {
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（探测未托管的 zone、幂等删除不存在的记录等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `debug` 级别，`false` 时使用 `warn` 或 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::DomainNotFound { .. } | Self::RecordNotFound { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::RecordExists { record_name, .. } => {
                write!(f, "Record '{record_name}' already exists")
            }
            Self::RecordNotFound { record_id, .. } => {
                write!(f, "Record '{record_id}' not found")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::QuotaExceeded { .. } => {
                write!(f, "Quota exceeded")
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::DomainNotFound {
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Domain '{domain}' not found: {msg}")
                } else {
                    write!(f, "Domain '{domain}' not found")
                }
            }
            Self::DomainLocked {
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Domain '{domain}' is locked: {msg}")
                } else {
                    write!(f, "Domain '{domain}' is locked")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::Unknown { raw_message, .. } => {
                write!(f, "{raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

// ============ ChallengeError ============

/// Error boundary seen by the host certificate framework.
///
/// Serialized as `{"code": "...", "details": {...}}` for structured reporting.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ChallengeError {
    /// 配置错误（凭证缺失、校验主机名与 zone 不一致等）
    #[error("Configuration error: {detail}")]
    Configuration { detail: String },

    /// 后缀探测失败，没有任何候选 zone 被服务商识别
    #[error("Unable to determine base domain for '{domain}' (tried: {tried:?})")]
    ZoneResolution { domain: String, tried: Vec<String> },

    /// 目标名称被非 TXT 记录占用，拒绝覆盖
    #[error("Record '{name}' in zone '{zone}' has type {record_type}, refusing to replace a non-TXT record")]
    RecordConflict {
        name: String,
        zone: String,
        record_type: String,
    },

    /// 清理阶段删除记录失败（仅记录日志，不向上传播）
    #[error("Failed to delete record {record_id} in zone '{zone}': {source}")]
    Cleanup {
        zone: String,
        record_id: String,
        source: ProviderError,
    },

    /// 服务商适配层错误
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl ChallengeError {
    /// 是否为预期行为（正常业务流程中可能出现的错误），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration { .. }
            | Self::ZoneResolution { .. }
            | Self::RecordConflict { .. } => true,
            Self::Cleanup { .. } => false,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Convenience type alias for `Result<T, ChallengeError>`.
pub type ChallengeResult<T> = std::result::Result<T, ChallengeError>;
