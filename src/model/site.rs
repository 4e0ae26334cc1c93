//! 命中位置：把 jsonpath-rust 返回的规范化路径还原为 键/索引 步骤序列
//!
//! 规范化路径形如 `$['sections'][0]['title']`，交回 jsonpath-rust 解析，
//! 键名中的转义（`\'`、`\n`、`\u0001` 等）由解析器还原。

use jsonpath_rust::parser::model::{Segment, Selector};
use jsonpath_rust::parser::parse_json_path;

use crate::model::converter::ConvertError;

/// 路径中的一步：对象键或数组下标
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

/// 一个命中位置（容器 + 定位符），步骤为空表示根节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSite {
    pub steps: Vec<Step>,
}

impl MatchSite {
    /// 解析 `query_only_path` 返回的规范化路径
    pub fn parse(path: &str) -> Result<Self, ConvertError> {
        let query = parse_json_path(path)
            .map_err(|e| ConvertError::JsonPath(format!("无法解析匹配路径 {}: {}", path, e)))?;

        let steps = query
            .segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Selector(Selector::Name(key)) => Ok(Step::Key(key)),
                Segment::Selector(Selector::Index(index)) => usize::try_from(index)
                    .map(Step::Index)
                    .map_err(|_| ConvertError::JsonPath(format!("匹配路径含负下标: {}", path))),
                other => Err(ConvertError::JsonPath(format!(
                    "匹配路径不是规范化路径: {} ({:?})",
                    path, other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { steps })
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// 是否位于 other 之下（含相同位置）
    pub fn is_within(&self, other: &MatchSite) -> bool {
        self.steps.starts_with(&other.steps)
    }

    /// RFC 6901 JSON Pointer，用于 `Value::pointer_mut`
    pub fn pointer(steps: &[Step]) -> String {
        let mut out = String::new();
        for step in steps {
            out.push('/');
            match step {
                Step::Key(key) => out.push_str(&key.replace('~', "~0").replace('/', "~1")),
                Step::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }
}
