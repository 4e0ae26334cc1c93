//! 标签清洗：<b> 规范为 <strong>，删除 <br>/<p>，并按 <p>...</p> 拆分段落

use std::sync::LazyLock;

use regex::Regex;

static B_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<\s*b\s*>").unwrap());
static B_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<\s*/\s*b\s*>").unwrap());
static BR_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?br>").unwrap());
static P_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?p>").unwrap());
// 最左最短匹配：从第一个 <p> 到其后最近的 </p>，匹配之间互不重叠
static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<p>(.*?)</p>").unwrap());

/// 清洗单段文本：<b> → <strong>，</b> → </strong>，删除 <br>、</br>、<p>、</p>，并去除首尾空白
pub fn sanitize(text: &str) -> String {
    let text = B_OPEN.replace_all(text, "<strong>");
    let text = B_CLOSE.replace_all(&text, "</strong>");
    let text = BR_TAGS.replace_all(&text, "");
    let text = P_TAGS.replace_all(&text, "");
    text.trim().to_string()
}

/// 是否包含至少一个成对的 <p>...</p>
pub fn has_paragraphs(text: &str) -> bool {
    PARAGRAPH.is_match(text)
}

/// 提取所有 <p>...</p> 的内部内容（去除首尾空白），丢弃空段落
///
/// 段落之外的内容（包括孤立的 <p> 或 </p>）一律丢弃。嵌套的 <p> 不做配对：
/// `<p><p>A</p></p>` 得到一个段落 `<p>A`，剩余的 `</p>` 被忽略。
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH
        .captures_iter(text)
        .filter_map(|caps| {
            let inner = caps.get(1)?.as_str().trim();
            (!inner.is_empty()).then(|| inner.to_string())
        })
        .collect()
}

/// 拆分并逐段清洗
pub fn split_sanitized(text: &str) -> Vec<String> {
    split_paragraphs(text).iter().map(|p| sanitize(p)).collect()
}
