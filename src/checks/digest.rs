use crate::checks::common::{read_task_file, Findings};
use anyhow::Result;
use std::path::Path;

const PENDING_MARKER: &str = "(Pending)";

/// Display entries are cut to this many characters
const ENTRY_WIDTH: usize = 60;

fn display_entry(line: &str) -> String {
    line.trim().chars().take(ENTRY_WIDTH).collect()
}

/// Lines of the architect's digest that still carry the pending marker
pub fn scan(content: &str, display_limit: usize) -> Findings {
    Findings::collect(
        content
            .lines()
            .filter(|line| line.contains(PENDING_MARKER))
            .map(display_entry),
        display_limit,
    )
}

/// Count pending entries in the digest file. A missing file has none.
pub fn check(path: &Path, display_limit: usize) -> Result<Findings> {
    Ok(read_task_file(path)?
        .map(|content| scan(&content, display_limit))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_pending_lines() {
        let content = "\
## Tasks
- Task 1: Build parser (Done)
- Task 2: Wire CLI (Pending)
   * Task 3 (Pending) needs review
(pending) lowercase is not a marker
";
        let findings = scan(content, 5);
        assert_eq!(findings.count, 2);
        assert_eq!(
            findings.samples,
            vec![
                "- Task 2: Wire CLI (Pending)".to_string(),
                "* Task 3 (Pending) needs review".to_string(),
            ]
        );
    }

    #[test]
    fn test_entries_truncated_to_width() {
        let line = format!("{} (Pending)", "x".repeat(100));
        let findings = scan(&line, 5);
        assert_eq!(findings.samples[0].chars().count(), ENTRY_WIDTH);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let line = format!("{} (Pending)", "é".repeat(70));
        let findings = scan(&line, 5);
        assert_eq!(findings.samples[0], "é".repeat(60));
    }

    #[test]
    fn test_check_missing_file() {
        let temp = TempDir::new().unwrap();
        let findings = check(&temp.path().join("architects_digest.md"), 5).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_check_limit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("architects_digest.md");
        let content: String = (1..=8).map(|i| format!("Step {} (Pending)\n", i)).collect();
        fs::write(&path, content).unwrap();

        let findings = check(&path, 5).unwrap();
        assert_eq!(findings.count, 8);
        assert_eq!(findings.samples.len(), 5);
        assert_eq!(findings.samples[4], "Step 5 (Pending)");
    }
}
