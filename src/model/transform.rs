//! 元素转换：把命中位置上的任意 JSON 值转换为新版本的表示
//!
//! 按值的形状分派：
//! - 字符串：含 <p> 段落则拆分（单段收敛为字符串），否则仅清洗标签
//! - 文本块（含 `text` 键的对象）：按段落拆分并把占位符定义分配到各段
//! - 其他对象：逐个值递归转换，键不变
//! - 数组：逐元素转换，一个元素可展开为多个兄弟元素
//! - 数字、布尔、null：原样返回

use serde_json::{Map, Value};

use crate::model::markup::{has_paragraphs, sanitize, split_sanitized};
use crate::model::placeholder::count_placeholder_names;

/// 转换单个值；返回数组表示“一个值变为多个兄弟元素”，由调用方决定是否展开
pub fn transform(value: Value) -> Value {
    match value {
        Value::String(text) => transform_string(&text),
        Value::Object(map) if is_text_block(&map) => transform_text_block(map),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| (key, transform(child)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(transform_list(items)),
        other => other,
    }
}

/// 文本块判定：对象中存在 `text` 键
pub fn is_text_block(map: &Map<String, Value>) -> bool {
    map.contains_key("text")
}

fn transform_string(text: &str) -> Value {
    if !has_paragraphs(text) {
        return Value::String(sanitize(text));
    }
    let mut paragraphs = split_sanitized(text);
    if paragraphs.len() == 1 {
        return Value::String(paragraphs.remove(0));
    }
    Value::Array(paragraphs.into_iter().map(Value::String).collect())
}

fn transform_text_block(mut block: Map<String, Value>) -> Value {
    // text 不是字符串时无法清洗，原样返回
    let Some(Value::String(text)) = block.get("text") else {
        return Value::Object(block);
    };

    if has_paragraphs(text) {
        return Value::Array(split_text_block(text, block.get("placeholders")));
    }

    let cleaned = sanitize(text);
    block.insert("text".to_string(), Value::String(cleaned));
    Value::Object(block)
}

/// 拆分文本块：每段清洗后按段内出现次数复制对应的占位符定义
///
/// 带占位符的段落输出 `{text, placeholders}`，没有占位符的段落输出纯字符串。
/// 每个名字取 `placeholders` 中第一个同名定义；找不到定义的名字被忽略。
pub fn split_text_block(text: &str, placeholders: Option<&Value>) -> Vec<Value> {
    let definitions: &[Value] = match placeholders {
        Some(Value::Array(defs)) => defs,
        _ => &[],
    };

    split_sanitized(text)
        .into_iter()
        .map(|paragraph| {
            let mut attached = Vec::new();
            for (name, count) in count_placeholder_names(&paragraph) {
                if let Some(definition) = find_definition(definitions, &name) {
                    attached.extend((0..count).map(|_| definition.clone()));
                }
            }

            if attached.is_empty() {
                return Value::String(paragraph);
            }
            let mut block = Map::new();
            block.insert("text".to_string(), Value::String(paragraph));
            block.insert("placeholders".to_string(), Value::Array(attached));
            Value::Object(block)
        })
        .collect()
}

fn find_definition<'a>(definitions: &'a [Value], name: &str) -> Option<&'a Value> {
    definitions
        .iter()
        .find(|def| def.get("placeholder").and_then(Value::as_str) == Some(name))
}

fn transform_list(items: Vec<Value>) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if let Some(expanded) = expand_list_entry(&item) {
            out.extend(expanded);
            continue;
        }
        match transform(item) {
            Value::Array(spliced) => out.extend(spliced),
            single => out.push(single),
        }
    }
    out
}

/// 数组中的对象若有某个字符串值含 <p> 段落，则按该键拆分为多个单键对象
///
/// 只取第一个符合条件的键；对象的其余键不会带入展开结果。
fn expand_list_entry(item: &Value) -> Option<Vec<Value>> {
    let map = item.as_object()?;
    let (key, text) = map.iter().find_map(|(key, value)| match value {
        Value::String(text) if has_paragraphs(text) => Some((key, text)),
        _ => None,
    })?;

    Some(
        split_sanitized(text)
            .into_iter()
            .map(|paragraph| {
                let mut entry = Map::new();
                entry.insert(key.clone(), Value::String(paragraph));
                Value::Object(entry)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn first_name() -> Value {
        json!({
            "placeholder": "first_name",
            "value": {"source": "metadata", "identifier": "FIRST_NAME"}
        })
    }

    #[test]
    fn test_string_cases() {
        assert_eq!(transform(json!("<p>One</p><p>Two</p>")), json!(["One", "Two"]));
        assert_eq!(transform(json!("<p></p><p>Second</p>")), json!("Second"));
        assert_eq!(transform(json!("No tags")), json!("No tags"));
        assert_eq!(transform(json!("<p>  </p><p>Second</p>")), json!("Second"));
        assert_eq!(transform(json!("<p><p>First</p></p>")), json!("First"));
        assert_eq!(transform(json!("<p></p>")), json!([]));
        assert_eq!(transform(json!("<p>Alpha</p><b>Beta</b>")), json!("Alpha"));
    }

    #[test]
    fn test_single_paragraph_collapses_to_string() {
        assert_eq!(transform(json!("<p>Only</p>")), json!("Only"));
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(transform(json!(123)), json!(123));
        assert_eq!(transform(json!(true)), json!(true));
        assert_eq!(transform(Value::Null), Value::Null);
    }

    #[test]
    fn test_text_block_without_paragraphs_is_cleaned_in_place() {
        let block = json!({"text": "<b>Hi</b> {first_name}", "placeholders": [first_name()], "extra": 1});
        let out = transform(block);
        assert_eq!(
            out,
            json!({"text": "<strong>Hi</strong> {first_name}", "placeholders": [first_name()], "extra": 1})
        );
    }

    #[test]
    fn test_text_block_with_non_string_text_is_untouched() {
        let block = json!({"text": 5, "placeholders": []});
        assert_eq!(transform(block.clone()), block);
    }

    #[test]
    fn test_text_block_fan_out() {
        let n = json!({"placeholder": "n", "value": {"source": "answers", "identifier": "n"}});
        let block = json!({"text": "<p>Hi {n}</p><p>Bye {n} {n}</p>", "placeholders": [n.clone()]});
        let out = transform(block);
        assert_eq!(
            out,
            json!([
                {"text": "Hi {n}", "placeholders": [n.clone()]},
                {"text": "Bye {n} {n}", "placeholders": [n.clone(), n]}
            ])
        );
    }

    #[test]
    fn test_text_block_copies_are_independent() {
        let block = json!({"text": "<p>{a} {a}</p>", "placeholders": [{"placeholder": "a", "value": 1}]});
        let mut out = split_text_block(block["text"].as_str().unwrap(), block.get("placeholders"));
        out[0]["placeholders"][0]["value"] = json!(99);
        assert_eq!(out[0]["placeholders"][1]["value"], json!(1), "修改一个副本不应影响另一个");
    }

    #[test]
    fn test_text_block_mixed_paragraphs() {
        let last_name = json!({"placeholder": "last_name", "value": {"source": "metadata", "identifier": "LAST_NAME"}});
        let block = json!({
            "text": "<p>Hello {first_name}</p><p>Once again</p><p>{last_name} and {unknown}</p>",
            "placeholders": [first_name(), last_name.clone()]
        });
        let out = transform(block);
        assert_eq!(
            out,
            json!([
                {"text": "Hello {first_name}", "placeholders": [first_name()]},
                "Once again",
                {"text": "{last_name} and {unknown}", "placeholders": [last_name]}
            ])
        );
    }

    #[test]
    fn test_text_block_first_definition_wins() {
        let block = json!({
            "text": "<p>{x}</p><p>y</p>",
            "placeholders": [
                {"placeholder": "x", "value": "first"},
                {"placeholder": "x", "value": "second"}
            ]
        });
        let out = transform(block);
        assert_eq!(out[0]["placeholders"], json!([{"placeholder": "x", "value": "first"}]));
    }

    #[test]
    fn test_text_block_tolerates_bad_placeholders() {
        let block = json!({"text": "<p>{x}</p><p>z</p>", "placeholders": "oops"});
        assert_eq!(transform(block), json!(["{x}", "z"]));

        let block = json!({"text": "<p>{x}</p><p>z</p>", "placeholders": [1, null, {"placeholder": "x"}]});
        assert_eq!(transform(block), json!([{"text": "{x}", "placeholders": [{"placeholder": "x"}]}, "z"]));
    }

    #[test]
    fn test_map_without_text_recurses_and_keeps_keys() {
        let map = json!({"title": "<b>T</b>", "notes": "<p>A</p><p>B</p>", "count": 3});
        assert_eq!(
            transform(map),
            json!({"title": "<strong>T</strong>", "notes": ["A", "B"], "count": 3})
        );
    }

    #[test]
    fn test_list_expandable_entry_drops_other_keys() {
        let list = json!([{"description": "<p>A</p><p><b>B</b></p>", "id": "keep-me"}]);
        assert_eq!(
            transform(list),
            json!([{"description": "A"}, {"description": "<strong>B</strong>"}])
        );
    }

    #[test]
    fn test_list_expands_first_matching_key_only() {
        let list = json!([{"a": "plain", "b": "<p>B1</p><p>B2</p>", "c": "<p>C</p>"}]);
        assert_eq!(transform(list), json!([{"b": "B1"}, {"b": "B2"}]));
    }

    #[test]
    fn test_list_flattens_nested_results() {
        let list = json!(["<p>A</p><p>B</p>", ["<p>C</p><p>D</p>", "E"], {"title": "<b>F</b>"}]);
        assert_eq!(
            transform(list),
            json!(["A", "B", "C", "D", "E", {"title": "<strong>F</strong>"}])
        );
    }

    #[test]
    fn test_list_malformed_scalars_pass_through() {
        let list = json!([123, null, true, {"text": "<p>Test</p>"}]);
        assert_eq!(transform(list), json!([123, null, true, {"text": "Test"}]));
    }

    #[test]
    fn test_mixed_items() {
        let list = json!([
            "Simple <b>value</b>",
            {"text": "<p>Hi {first_name}</p>", "placeholders": [first_name()]},
            {"info": "Info"}
        ]);
        let out = transform(list);
        assert_eq!(out[0], json!("Simple <strong>value</strong>"));
        assert_eq!(out[1], json!({"text": "Hi {first_name}"}));
        assert_eq!(out[2], json!({"info": "Info"}));
    }
}
