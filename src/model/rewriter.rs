//! 树重写：按 JSONPath 逐条定位命中位置，转换后回写到所属容器
//!
//! 每条路径先在当前工作树上求出全部命中位置（快照），再按顺序逐个改写。
//! 数组元素被展开为 N 个兄弟元素时，记录该容器中的位移，后续命中位置的下标据此修正。
//! 已被改写位置之下的命中位置会被跳过，它们已随祖先一起转换。

use std::borrow::Cow;
use std::collections::HashMap;

use jsonpath_rust::JsonPath;
use serde_json::Value;

use crate::model::converter::ConvertError;
use crate::model::site::{MatchSite, Step};
use crate::model::transform::transform;

/// 对输入树的深拷贝依次应用每条路径，返回新树
pub fn rewrite<S: AsRef<str>>(root: &Value, paths: &[S]) -> Result<Value, ConvertError> {
    let mut working = root.clone();
    for path in paths {
        let path = path.as_ref();
        let rewritten = rewrite_path(&mut working, path)?;
        tracing::debug!("路径 {} 改写了 {} 个位置", path, rewritten);
    }
    Ok(working)
}

/// 补全缺省的根标识：`contents[*].description` → `$.contents[*].description`
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let path = path.trim();
    if path.starts_with('$') {
        Cow::Borrowed(path)
    } else if path.starts_with('.') || path.starts_with('[') {
        Cow::Owned(format!("${}", path))
    } else {
        Cow::Owned(format!("$.{}", path))
    }
}

/// 在工作树上求出路径的全部命中位置
pub fn find_sites(working: &Value, path: &str) -> Result<Vec<MatchSite>, ConvertError> {
    let expr = normalize_path(path);
    let raw: Vec<String> = working
        .query_only_path(&expr)
        .map_err(|e| ConvertError::JsonPath(e.to_string()))?;
    raw.iter().map(|p| MatchSite::parse(p)).collect()
}

/// 应用单条路径，返回实际改写的位置数
pub fn rewrite_path(working: &mut Value, path: &str) -> Result<usize, ConvertError> {
    let sites = find_sites(working, path)?;
    rewrite_sites(working, path, sites)
}

/// 按快照顺序改写各命中位置；快照中的位置在当前树里找不到即为错误
fn rewrite_sites(
    working: &mut Value,
    path: &str,
    sites: Vec<MatchSite>,
) -> Result<usize, ConvertError> {
    let mut offsets = SpliceOffsets::default();
    let mut done: Vec<MatchSite> = Vec::with_capacity(sites.len());

    for site in sites {
        if done.iter().any(|prior| site.is_within(prior)) {
            tracing::debug!("跳过已随祖先改写的位置: {:?}", site.steps);
            continue;
        }
        let resolved = offsets.resolve(&site.steps).ok_or_else(|| {
            ConvertError::JsonPath(format!(
                "路径 {} 的命中位置在改写后失效: {:?}",
                path, site.steps
            ))
        })?;

        match apply_site(working, &resolved) {
            Outcome::Replaced => {}
            Outcome::Spliced { inserted } => {
                if let Some((Step::Index(index), parent)) = site.steps.split_last() {
                    offsets.record(parent, *index, inserted as isize - 1);
                }
            }
            Outcome::Missing => {
                tracing::error!("路径 {} 的命中位置不存在或类型不符: {:?}", path, resolved);
                return Err(ConvertError::JsonPath(format!(
                    "路径 {} 的命中位置不存在: {}",
                    path,
                    MatchSite::pointer(&resolved)
                )));
            }
        }
        done.push(site);
    }

    Ok(done.len())
}

enum Outcome {
    Replaced,
    Spliced { inserted: usize },
    Missing,
}

fn apply_site(working: &mut Value, steps: &[Step]) -> Outcome {
    let Some((locator, parent_steps)) = steps.split_last() else {
        let old = std::mem::take(working);
        *working = transform(old);
        return Outcome::Replaced;
    };

    let Some(container) = working.pointer_mut(&MatchSite::pointer(parent_steps)) else {
        return Outcome::Missing;
    };

    match (container, locator) {
        (Value::Object(map), Step::Key(key)) => {
            let Some(slot) = map.get_mut(key) else {
                return Outcome::Missing;
            };
            let old = std::mem::take(slot);
            *slot = transform(old);
            Outcome::Replaced
        }
        (Value::Array(items), Step::Index(index)) if *index < items.len() => {
            let old = std::mem::take(&mut items[*index]);
            match transform(old) {
                Value::Array(expanded) => {
                    let inserted = expanded.len();
                    items.splice(*index..*index + 1, expanded);
                    Outcome::Spliced { inserted }
                }
                single => {
                    items[*index] = single;
                    Outcome::Replaced
                }
            }
        }
        _ => Outcome::Missing,
    }
}

/// 每个数组容器（以快照中的路径标识）中已发生的展开：(原下标, 长度变化)
#[derive(Debug, Default)]
struct SpliceOffsets {
    by_container: HashMap<Vec<Step>, Vec<(usize, isize)>>,
}

impl SpliceOffsets {
    fn record(&mut self, container: &[Step], index: usize, delta: isize) {
        if delta != 0 {
            self.by_container
                .entry(container.to_vec())
                .or_default()
                .push((index, delta));
        }
    }

    /// 把快照坐标的步骤换算为当前树中的坐标
    fn resolve(&self, steps: &[Step]) -> Option<Vec<Step>> {
        if self.by_container.is_empty() {
            return Some(steps.to_vec());
        }
        let mut resolved = Vec::with_capacity(steps.len());
        for (depth, step) in steps.iter().enumerate() {
            match step {
                Step::Index(index) => {
                    let shift: isize = self
                        .by_container
                        .get(&steps[..depth])
                        .map(|edits| {
                            edits
                                .iter()
                                .filter(|(at, _)| at < index)
                                .map(|(_, delta)| delta)
                                .sum()
                        })
                        .unwrap_or(0);
                    let shifted = usize::try_from(*index as isize + shift).ok()?;
                    resolved.push(Step::Index(shifted));
                }
                Step::Key(_) => resolved.push(step.clone()),
            }
        }
        Some(resolved)
    }
}
