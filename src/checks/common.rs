use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Matches found in one task source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    /// Total number of matching lines
    pub count: usize,
    /// The first `display_limit` matches, in file order
    pub samples: Vec<String>,
}

impl Findings {
    /// Count every item but keep only the first `display_limit` for display
    pub fn collect(items: impl IntoIterator<Item = String>, display_limit: usize) -> Self {
        let mut findings = Findings::default();
        for item in items {
            if findings.samples.len() < display_limit {
                findings.samples.push(item);
            }
            findings.count += 1;
        }
        findings
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Append a titled, indented section to a message being built.
    /// Nothing is appended when there are no findings.
    pub fn render_section(&self, title: &str, lines: &mut Vec<String>) {
        if self.is_empty() {
            return;
        }

        lines.push(format!("\n{} ({}):", title, self.count));
        for sample in &self.samples {
            lines.push(format!("  - {}", sample));
        }
        if self.count > self.samples.len() {
            lines.push(format!("  ... and {} more", self.count - self.samples.len()));
        }
    }
}

/// Read a task file, treating a missing file as `None`.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_task_file(path: &Path) -> Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
    }
}
