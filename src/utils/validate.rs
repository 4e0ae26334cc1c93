//! 请求校验：版本号格式与输入 schema 非空

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

// 语义化版本核心部分，不允许前导零
static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    Current,
    Target,
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionKind::Current => f.write_str("current"),
            VersionKind::Target => f.write_str("target"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {kind} version must be in the format x.y.z where x, y, z are numbers")]
    InvalidVersion { kind: VersionKind, version: String },
    #[error("Input JSON schema is empty")]
    EmptySchema,
}

pub fn validate_version(version: &str, kind: VersionKind) -> Result<(), ValidationError> {
    if VERSION.is_match(version) {
        tracing::debug!("{} 版本格式正确: {}", kind, version);
        Ok(())
    } else {
        tracing::error!("{} 版本格式无效: {}", kind, version);
        Err(ValidationError::InvalidVersion {
            kind,
            version: version.to_string(),
        })
    }
}

/// 拒绝空输入：null、{}、[]、""
pub fn validate_input_schema(schema: &Value) -> Result<(), ValidationError> {
    let empty = match schema {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    };
    if empty {
        tracing::error!("输入 schema 为空");
        return Err(ValidationError::EmptySchema);
    }
    Ok(())
}

/// 依次校验当前版本、目标版本与输入 schema
pub fn validate_request(
    current_version: &str,
    target_version: &str,
    schema: &Value,
) -> Result<(), ValidationError> {
    validate_version(current_version, VersionKind::Current)?;
    validate_version(target_version, VersionKind::Target)?;
    validate_input_schema(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_versions() {
        for v in ["9.0.0", "10.0.0", "0.0.1", "123.45.6"] {
            assert!(validate_version(v, VersionKind::Current).is_ok(), "{} 应为有效版本", v);
        }
    }

    #[test]
    fn test_invalid_versions() {
        let invalid = [
            "", "10", "10.0", "10.0.0.0", "01.0.0", "1.00.0", "v1.0.0", "1.0.0-beta", "a.b.c", " 1.0.0",
        ];
        for v in invalid {
            assert!(validate_version(v, VersionKind::Target).is_err(), "{} 应为无效版本", v);
        }
    }

    #[test]
    fn test_version_error_message() {
        let err = validate_version("x", VersionKind::Current).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The current version must be in the format x.y.z where x, y, z are numbers"
        );
        let err = validate_version("x", VersionKind::Target).unwrap_err();
        assert!(err.to_string().starts_with("The target version"));
    }

    #[test]
    fn test_empty_schema() {
        for empty in [json!(null), json!({}), json!([]), json!("")] {
            assert_eq!(validate_input_schema(&empty), Err(ValidationError::EmptySchema));
        }
        assert!(validate_input_schema(&json!({"title": "x"})).is_ok());
    }

    #[test]
    fn test_validate_request_order() {
        let err = validate_request("bad", "also-bad", &json!({})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVersion { kind: VersionKind::Current, .. }));

        let err = validate_request("9.0.0", "also-bad", &json!({})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVersion { kind: VersionKind::Target, .. }));

        let err = validate_request("9.0.0", "10.0.0", &json!({})).unwrap_err();
        assert_eq!(err, ValidationError::EmptySchema);
    }
}
