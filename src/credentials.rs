//! 凭证装载
//!
//! 凭证有两个来源：TOML 凭证文件（键 `secret_id`/`secret_key`），
//! 或环境变量 [`SECRET_ID_ENV`]/[`SECRET_KEY_ENV`]。

use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ChallengeError, ChallengeResult};

/// secret id 的环境变量名
pub const SECRET_ID_ENV: &str = "TENCENTCLOUD_SECRET_ID";
/// secret key 的环境变量名
pub const SECRET_KEY_ENV: &str = "TENCENTCLOUD_SECRET_KEY";

/// 腾讯云 API 凭证对
#[derive(Debug, Clone)]
pub struct Credentials {
    pub secret_id: String,
    pub secret_key: String,
}

/// 凭证文件的反序列化形态，字段可选以便给出精确的缺失报错
#[derive(Debug, Deserialize)]
struct CredentialFile {
    secret_id: Option<String>,
    secret_key: Option<String>,
}

impl Credentials {
    /// 装载凭证：给了文件路径读文件，否则读环境变量
    pub fn resolve(file: Option<&Path>) -> ChallengeResult<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::from_env(),
        }
    }

    /// 从 TOML 凭证文件读取
    pub fn from_file(path: &Path) -> ChallengeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChallengeError::Configuration {
            detail: format!("Unable to read credential file {}: {e}", path.display()),
        })?;

        let parsed: CredentialFile =
            toml::from_str(&content).map_err(|e| ChallengeError::Configuration {
                detail: format!("Invalid credential file {}: {e}", path.display()),
            })?;

        Ok(Self {
            secret_id: required_field(parsed.secret_id, "secret_id", path)?,
            secret_key: required_field(parsed.secret_key, "secret_key", path)?,
        })
    }

    /// 从环境变量读取
    pub fn from_env() -> ChallengeResult<Self> {
        Ok(Self {
            secret_id: required_env(SECRET_ID_ENV)?,
            secret_key: required_env(SECRET_KEY_ENV)?,
        })
    }
}

fn required_field(value: Option<String>, key: &str, path: &Path) -> ChallengeResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ChallengeError::Configuration {
            detail: format!(
                "{key} is missing or empty in credential file {}",
                path.display()
            ),
        }),
    }
}

fn required_env(var: &str) -> ChallengeResult<String> {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ChallengeError::Configuration {
            detail: format!("The environment variable {var} is required"),
        }),
    }
}
