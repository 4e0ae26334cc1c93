//! 路径目录：需要迁移到 v10 的字符串字段（静态配置，顺序即应用顺序）

use jsonpath_rust::JsonPath;
use serde::Serialize;
use serde_json::Value;

use crate::model::converter::ConvertError;
use crate::model::rewriter::normalize_path;

/// 目录条目：JSONPath 表达式及其说明
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub json_path: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub additional_context: &'static [&'static str],
}

fn is_empty(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

const fn entry(json_path: &'static str, description: &'static str) -> PathEntry {
    PathEntry {
        json_path,
        description,
        context: None,
        additional_context: &[],
    }
}

impl PathEntry {
    const fn context(mut self, context: &'static str) -> Self {
        self.context = Some(context);
        self
    }

    const fn additional(mut self, additional_context: &'static [&'static str]) -> Self {
        self.additional_context = additional_context;
        self
    }
}

/// v10 迁移目录
pub static CATALOGUE: &[PathEntry] = &[
    entry("$.legal_basis", "Questionnaire legal basis"),
    entry("$.messages.*", "Global answer error message"),
    entry("$.submission.guidance", "Submission guidance"),
    entry("$.submission.warning", "Submission warning"),
    entry("$.post_submission.guidance.contents[*].title", "Post submission guidance heading"),
    entry(
        "$.post_submission.guidance.contents[*].description",
        "Post submission guidance description",
    ),
    entry("$.post_submission.guidance.contents[*].list[*]", "Post submission guidance list item")
        .additional(&["ListHeading", "ListDescription"]),
    entry("$..page_title", "Page title"),
    entry("$.sections[*].repeat.title", "Section title (repeating section)"),
    entry("$.sections[*].repeat.page_title", "Section page title suffix (repeating section)"),
    entry("$.sections[*].summary.items[*].title", "Section summary item title"),
    entry("$.sections[*].summary.items[*].add_link_text", "Section summary list add link"),
    entry("$.sections[*].summary.items[*].empty_list_text", "Section summary empty list text"),
    entry(
        "$.sections[*].summary.items[*].item_label",
        "Label for the item title on a section summary",
    ),
    entry("$..blocks[*].title", "Block title"),
    entry("$..summary.item_title", "List collector summary item"),
    entry("$..summary.empty_list_text", "List collector empty list text"),
    entry("$..summary.add_link_text", "List collector add link text"),
    entry("$..summary.item_label", "List collector item label"),
    entry("$..add_block.cancel_text", "List collector add block cancel link"),
    entry("$..repeating_blocks[*].question.title.text", "Repeating block question"),
    entry("$..content.title", "Content page main heading"),
    entry("$..content.instruction[*]", "Content instruction"),
    entry("$..content.contents[*].title", "Content page heading")
        .context("Content"),
    entry("$..content.contents[*].description", "Content page description")
        .context("Content"),
    entry("$..content.contents[*].list[*]", "Content page list item")
        .context("Content")
        .additional(&["ListHeading", "ListDescription"]),
    entry("$..content.contents[*].definition.title", "Definition title")
        .context("Content"),
    entry("$..content.contents[*].definition.contents[*].description", "Definition description")
        .context("Content"),
    entry("$..content_variants[*].content.title", "Content page heading")
        .context("Content"),
    entry("$..content_variants[*].content.contents[*].description", "Content page description")
        .context("Content"),
    entry("$..question.description[*]", "Question description")
        .context("Question"),
    entry("$..question.instruction[*]", "Question instruction")
        .context("Question"),
    entry("$..question.warning", "Question warning")
        .context("Question"),
    entry("$..question.definitions[*].title", "Question definition link")
        .context("Question"),
    entry("$..question.definitions[*].contents[*].title", "Question definition heading")
        .context("Question"),
    entry("$..question.definitions[*].contents[*].description", "Question definition description")
        .context("Question"),
    entry("$..question.definitions[*].contents[*].list[*]", "Question definition list item")
        .context("Question")
        .additional(&["ListHeading", "ListDescription"]),
    entry("$..question.definition.title", "Question definition heading")
        .context("Question"),
    entry("$..question.definition.contents[*].title", "Question definition heading")
        .context("Question"),
    entry("$..question.definition.contents[*].description", "Question definition description")
        .context("Question"),
    entry("$..question.definition.contents[*].list[*]", "Question definition list item")
        .context("Question")
        .additional(&["ListHeading", "ListDescription"]),
    entry("$..question.guidance.contents[*].title", "Question guidance heading")
        .context("Question"),
    entry("$..question.guidance.contents[*].description", "Question guidance description")
        .context("Question"),
    entry("$..question.guidance.contents[*].list[*]", "Question guidance list item")
        .context("Question")
        .additional(&["ListHeading", "ListDescription"]),
    entry("$..question.calculation.title", "Question calculation title")
        .context("Question"),
    entry("$..answers[*].validation.messages.*", "Answer error message")
        .context("Question"),
    entry("$..answers[*].label", "Answer")
        .context("Question"),
    entry("$..answers[*].instruction", "Checkbox answer instruction")
        .context("Question"),
    entry("$..answers[*].placeholder", "Dropdown field placeholder text")
        .context("Question"),
    entry("$..answers[*].description", "Answer description")
        .context("Question")
        .additional(&["Answer"]),
    entry("$..answers[*].playback", "Relationships playback template")
        .context("Question"),
    entry("$..answers[*].options[*].label", "Answer option")
        .context("Question"),
    entry("$..answers[*].options[*].description", "Answer option description")
        .context("Question")
        .additional(&["AnswerOption"]),
    entry("$..answers[*].options[*].detail_answer.label", "Detail answer label")
        .context("Question")
        .additional(&["AnswerOption"]),
    entry("$..answers[*].options[*].detail_answer.description", "Detail answer description")
        .context("Question")
        .additional(&["AnswerOption"]),
    entry("$..answers[*].options[*].title", "Relationships answer option question text")
        .context("Question"),
    entry("$..answers[*].options[*].playback", "Relationships answer option playback text")
        .context("Question"),
    entry("$..answers[*].guidance.show_guidance", "Answer guidance show link")
        .context("Question"),
    entry("$..answers[*].guidance.hide_guidance", "Answer guidance hide link")
        .context("Question"),
    entry("$..answers[*].guidance.contents[*].title", "Answer guidance heading")
        .context("Question"),
    entry("$..answers[*].guidance.contents[*].description", "Answer guidance description")
        .context("Question"),
    entry("$..answers[*].guidance.contents[*].list[*]", "Answer guidance list item")
        .context("Question")
        .additional(&["ListHeading", "ListDescription"]),
    entry("$..primary_content[*].title", "Introduction main title"),
    entry("$..primary_content[*].contents[*].list[*]", "Introduction main list item")
        .context("PrimaryContent")
        .additional(&["ListHeading", "ListDescription"]),
    entry("$..primary_content[*].contents[*].description", "Introduction main description")
        .context("PrimaryContent"),
    entry(
        "$..primary_content[*].contents[*].guidance.contents[*].title",
        "Introduction main guidance title",
    )
    .context("PrimaryContent"),
    entry(
        "$..primary_content[*].contents[*].guidance.contents[*].description",
        "Introduction main guidance description",
    )
    .context("PrimaryContent")
    .additional(&["ListHeading"]),
    entry(
        "$..primary_content[*].contents[*].guidance.contents[*].list[*]",
        "Introduction main guidance list",
    )
    .context("PrimaryContent")
    .additional(&["ListHeading"]),
    entry("$..preview_content.title", "Introduction preview title"),
    entry("$..preview_content.contents[*].description", "Introduction preview description")
        .context("PreviewContent"),
    entry("$..preview_content.questions[*].question", "Introduction preview question title")
        .context("PreviewContent"),
    entry(
        "$..preview_content.questions[*].contents[*].description",
        "Introduction preview question description",
    )
    .context("PreviewContent")
    .additional(&["PreviewQuestionListHeading"]),
    entry(
        "$..preview_content.questions[*].contents[*].list[*]",
        "Introduction preview question list item",
    )
    .context("PreviewContent")
    .additional(&["PreviewQuestionListHeading"]),
    entry("$..secondary_content[*].contents[*].title", "Introduction additional title"),
    entry("$..secondary_content[*].contents[*].list[*]", "Introduction additional list item")
        .context("ListHeading")
        .additional(&["ListDescription"]),
    entry("$..secondary_content[*].contents[*].description", "Introduction additional description")
        .context("ListHeading"),
];

/// 仅取表达式，按目录顺序
pub fn catalogue_paths(entries: &[PathEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.json_path).collect()
}

/// 对空文档求值一次每个表达式，任何解析错误都视为目录缺陷
pub fn validate_catalogue(entries: &[PathEntry]) -> Result<(), ConvertError> {
    let probe = Value::Null;
    for e in entries {
        probe
            .query_only_path(&normalize_path(e.json_path))
            .map_err(|err| ConvertError::InvalidPath {
                path: e.json_path.to_string(),
                reason: err.to_string(),
            })?;
    }
    Ok(())
}
