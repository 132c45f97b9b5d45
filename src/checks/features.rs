use crate::checks::common::{read_task_file, Findings};
use anyhow::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `- [ ] Incomplete: name` or `- [ ] name`. Only an empty checkbox with exactly one space matches.
#[allow(clippy::unwrap_used)]
static UNCHECKED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*\[ \]\s*(?:Incomplete:\s*)?(.+)$").unwrap());

/// Extract the feature name from an unchecked checklist line
fn unchecked_feature(line: &str) -> Option<String> {
    UNCHECKED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Unchecked features in checklist text
pub fn scan(content: &str, display_limit: usize) -> Findings {
    Findings::collect(content.lines().filter_map(unchecked_feature), display_limit)
}

/// Count unchecked features in the feature list file. A missing file has none.
pub fn check(path: &Path, display_limit: usize) -> Result<Findings> {
    Ok(read_task_file(path)?
        .map(|content| scan(&content, display_limit))
        .unwrap_or_default())
}
