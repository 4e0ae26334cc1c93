//! 占位符提取：从文本中找出 `{name}` 形式的占位符名

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\{(.*?)\}").unwrap());

/// 按从左到右顺序提取占位符名，重复出现的名字会重复返回
pub fn extract_placeholder_names(text: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// 稳定多重集：按首次出现顺序返回 (名字, 次数)
pub fn count_placeholder_names(text: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for name in extract_placeholder_names(text) {
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    counts
}
