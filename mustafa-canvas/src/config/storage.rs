use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::{SiteConfig, SiteConfigFile};

const CONFIG_DIR_NAME: &str = "mustafa-canvas";
const CONFIG_FILE_NAME: &str = "site.json";

/// Status describing how the site config was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SiteConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the site config from disk.
#[derive(Debug, Clone)]
pub(crate) struct SiteConfigLoad {
    config: SiteConfig,
    status: SiteConfigLoadStatus,
}

impl SiteConfigLoad {
    fn new(config: SiteConfig, status: SiteConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SiteConfig, SiteConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_site_config() -> Result<SiteConfigLoad, ConfigError> {
    let dir = config_dir();
    load_site_config_from_path(&dir.join(CONFIG_FILE_NAME), &dir)
}

/// Directory holding `site.json` and the default inquiry outbox.
pub(super) fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join(CONFIG_DIR_NAME);
    }

    std::env::temp_dir().join(CONFIG_DIR_NAME)
}

fn load_site_config_from_path(
    path: &Path,
    config_dir: &Path,
) -> Result<SiteConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SiteConfigLoad::new(
                SiteConfig::defaults_in(config_dir),
                SiteConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let file = match serde_json::from_str::<SiteConfigFile>(&data) {
        Ok(file) => file,
        Err(err) => {
            return Ok(SiteConfigLoad::new(
                SiteConfig::defaults_in(config_dir),
                SiteConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(SiteConfigLoad::new(
        SiteConfig::from_file(file, config_dir),
        SiteConfigLoadStatus::Loaded,
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{SiteConfigLoadStatus, load_site_config_from_path};
    use crate::config::model::{SiteConfig, SiteConfigFile};
    use crate::widgets::tracker::ActivePolicy;

    #[test]
    fn given_missing_file_when_load_then_returns_defaults_with_missing_status()
    {
        let root = test_temp_dir("missing");
        let path = root.join("site.json");

        let loaded = load_site_config_from_path(&path, &root)
            .expect("missing config should not fail");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, SiteConfigLoadStatus::Missing));
        assert_eq!(config, SiteConfig::defaults_in(&root));
        assert_eq!(config.outbox_path(), root.join("inquiries.json"));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_fields_are_applied() {
        let root = test_temp_dir("valid");
        let path = root.join("site.json");
        let file = SiteConfigFile {
            active_section_policy: Some(ActivePolicy::NearestToCenter),
            active_threshold: Some(0.6),
            ..SiteConfigFile::default()
        };
        let payload = serde_json::to_string_pretty(&file)
            .expect("config payload should serialize");
        fs::write(&path, payload).expect("config payload should be written");

        let loaded = load_site_config_from_path(&path, &root)
            .expect("valid config should load");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, SiteConfigLoadStatus::Loaded));
        assert_eq!(
            config.active_section_policy(),
            ActivePolicy::NearestToCenter
        );
        assert_eq!(config.active_threshold(), 0.6);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_snake_case_policy_when_load_then_parses() {
        let root = test_temp_dir("snake_case");
        let path = root.join("site.json");
        fs::write(&path, r#"{ "active_section_policy": "nearest_to_center" }"#)
            .expect("config payload should be written");

        let loaded = load_site_config_from_path(&path, &root)
            .expect("valid config should load");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, SiteConfigLoadStatus::Loaded));
        assert_eq!(
            config.active_section_policy(),
            ActivePolicy::NearestToCenter
        );

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_defaults_with_invalid_status()
    {
        let root = test_temp_dir("invalid_json");
        let path = root.join("site.json");
        fs::write(&path, r#"{ "active_section_policy": "random" }"#)
            .expect("invalid test payload should be written");

        let loaded = load_site_config_from_path(&path, &root)
            .expect("loading invalid config should not fail with io error");
        let (config, status) = loaded.into_parts();

        assert_eq!(config, SiteConfig::defaults_in(&root));
        match status {
            SiteConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "mustafa-canvas-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
