use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "taskgate.yaml";

pub const DEFAULT_FEATURE_LIST: &str = "feature_list.md";
pub const DEFAULT_ARCHITECTS_DIGEST: &str = "architects_digest.md";
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;
pub const DEFAULT_NEXT_PHASE: &str = "Coding standards checker";

/// Raw configuration structure (as parsed from YAML)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScanConfigRaw {
    feature_list: Option<String>,
    architects_digest: Option<String>,
    display_limit: Option<usize>,
    next_phase: Option<String>,
}

/// Resolved configuration for the orchestrator loop scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Feature checklist, relative to cwd
    pub feature_list: String,
    /// Architect's digest, relative to cwd
    pub architects_digest: String,
    /// How many entries per source are shown in a block message
    pub display_limit: usize,
    /// Name of the phase that runs once all coding tasks are done
    pub next_phase: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            feature_list: DEFAULT_FEATURE_LIST.to_string(),
            architects_digest: DEFAULT_ARCHITECTS_DIGEST.to_string(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            next_phase: DEFAULT_NEXT_PHASE.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn feature_list_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.feature_list)
    }

    pub fn architects_digest_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.architects_digest)
    }
}

fn validate(config: &ScanConfig, config_path: &Path) -> Result<()> {
    if config.display_limit == 0 {
        bail!(
            "Invalid config at {}: 'display_limit' must be at least 1",
            config_path.display()
        );
    }
    for (key, value) in [
        ("feature_list", &config.feature_list),
        ("architects_digest", &config.architects_digest),
        ("next_phase", &config.next_phase),
    ] {
        if value.trim().is_empty() {
            bail!(
                "Invalid config at {}: '{}' must not be empty",
                config_path.display(),
                key
            );
        }
    }
    Ok(())
}

/// Loads and parses a taskgate.yaml config file, filling unset keys with defaults.
pub fn load_config(config_path: &Path) -> Result<ScanConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    // An empty file parses as YAML null
    let parsed: ScanConfigRaw = if content.trim().is_empty() {
        ScanConfigRaw::default()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?
    };

    let defaults = ScanConfig::default();
    let config = ScanConfig {
        feature_list: parsed.feature_list.unwrap_or(defaults.feature_list),
        architects_digest: parsed.architects_digest.unwrap_or(defaults.architects_digest),
        display_limit: parsed.display_limit.unwrap_or(defaults.display_limit),
        next_phase: parsed.next_phase.unwrap_or(defaults.next_phase),
    };

    validate(&config, config_path)?;

    Ok(config)
}

/// Candidate config locations for a project, in priority order
fn config_candidates(cwd: &Path) -> [PathBuf; 2] {
    [
        cwd.join(CONFIG_FILENAME),
        cwd.join(".claude").join(CONFIG_FILENAME),
    ]
}

/// Finds the first config file for `cwd`, falling back to defaults.
///
/// A broken config never stops the hook: it is logged and the defaults apply.
pub fn resolve_config(cwd: &Path) -> ScanConfig {
    let Some(config_path) = config_candidates(cwd).into_iter().find(|p| p.exists()) else {
        return ScanConfig::default();
    };

    match load_config(&config_path) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), ?config, "loaded config");
            config
        }
        Err(err) => {
            tracing::warn!("{:#}; using defaults", err);
            ScanConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_config(temp.path()), ScanConfig::default());
    }

    #[test]
    fn test_load_config_partial() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            r#"
feature_list: docs/features.md
display_limit: 3
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.feature_list, "docs/features.md");
        assert_eq!(config.display_limit, 3);
        assert_eq!(config.architects_digest, DEFAULT_ARCHITECTS_DIGEST);
        assert_eq!(config.next_phase, DEFAULT_NEXT_PHASE);
    }

    #[test]
    fn test_load_config_empty_file_is_defaults() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "").unwrap();

        assert_eq!(load_config(&config_path).unwrap(), ScanConfig::default());
    }

    #[test]
    fn test_load_config_zero_limit_fails() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "display_limit: 0\n").unwrap();

        assert!(load_config(&config_path).is_err());
    }

    #[test]
    fn test_load_config_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "feature_lst: typo.md\n").unwrap();

        assert!(load_config(&config_path).is_err());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "next_phase: \"\"\n").unwrap();

        assert_eq!(resolve_config(temp.path()), ScanConfig::default());
    }

    #[test]
    fn test_config_in_claude_dir() {
        let temp = TempDir::new().unwrap();
        let claude_dir = temp.path().join(".claude");
        fs::create_dir_all(&claude_dir).unwrap();
        fs::write(claude_dir.join(CONFIG_FILENAME), "next_phase: Security review\n").unwrap();

        assert_eq!(resolve_config(temp.path()).next_phase, "Security review");
    }

    #[test]
    fn test_root_config_wins_over_claude_dir() {
        let temp = TempDir::new().unwrap();
        let claude_dir = temp.path().join(".claude");
        fs::create_dir_all(&claude_dir).unwrap();
        fs::write(claude_dir.join(CONFIG_FILENAME), "display_limit: 2\n").unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "display_limit: 7\n").unwrap();

        assert_eq!(resolve_config(temp.path()).display_limit, 7);
    }
}
