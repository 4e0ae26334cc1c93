//! SchemaConverter：按目标版本决定是否迁移，并用注入的路径目录执行重写

use serde_json::Value;
use thiserror::Error;

use crate::model::catalogue::{catalogue_paths, validate_catalogue, PathEntry, CATALOGUE};
use crate::model::rewriter::rewrite;
use crate::utils::validate::ValidationError;

/// 唯一需要迁移的目标版本
pub const V10_TARGET: &str = "10.0.0";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("JSONPath错误: {0}")]
    JsonPath(String),
    #[error("目录中的路径无效: {path}: {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("请求校验失败: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct SchemaConverter {
    paths: Vec<&'static str>,
}

impl SchemaConverter {
    /// 使用给定目录构建；目录中任何无法解析的表达式都会直接报错
    pub fn new(entries: &[PathEntry]) -> Result<Self, ConvertError> {
        validate_catalogue(entries)?;
        Ok(Self {
            paths: catalogue_paths(entries),
        })
    }

    /// 使用内置 v10 目录
    pub fn v10() -> Result<Self, ConvertError> {
        Self::new(CATALOGUE)
    }

    pub fn paths(&self) -> &[&'static str] {
        &self.paths
    }

    /// 把 schema 从当前版本转换到目标版本
    ///
    /// 目标版本为 10.0.0 时对输入的深拷贝执行重写；其他目标版本原样返回输入（不报错）。
    pub fn convert(
        &self,
        current_version: &str,
        target_version: &str,
        schema: &Value,
    ) -> Result<Value, ConvertError> {
        tracing::debug!("当前版本: {}，目标版本: {}", current_version, target_version);

        if target_version != V10_TARGET {
            tracing::info!("目标版本 {} 无需转换，按原样返回输入 schema", target_version);
            return Ok(schema.clone());
        }

        tracing::debug!("按 {} 条路径转换到 {}", self.paths.len(), V10_TARGET);
        let converted = rewrite(schema, &self.paths)?;
        tracing::info!("schema 转换成功");
        Ok(converted)
    }
}

/// 使用内置目录的便捷入口
pub fn convert_schema(
    current_version: &str,
    target_version: &str,
    schema: &Value,
) -> Result<Value, ConvertError> {
    SchemaConverter::v10()?.convert(current_version, target_version, schema)
}
