//! CIR schema 版本迁移工具库
//!
//! 按固定的 JSONPath 目录定位 schema 中的字符串字段，清洗标签并把多段落文本
//! 拆分为兄弟元素（含占位符定义的重新分配），生成新版本 schema

pub mod config;
pub mod model;
pub mod utils;

// 重新导出主要类型
pub use config::Config;
pub use model::catalogue::{PathEntry, CATALOGUE};
pub use model::converter::{convert_schema, ConvertError, SchemaConverter, V10_TARGET};
pub use model::rewriter::rewrite;
pub use model::transform::transform;
pub use utils::validate::{validate_request, ValidationError, VersionKind};
