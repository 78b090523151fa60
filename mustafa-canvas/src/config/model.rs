use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::widgets::tracker::ActivePolicy;

const DEFAULT_ACTIVE_THRESHOLD: f32 = 0.5;
const DEFAULT_ASSETS_DIR: &str = "assets";
const OUTBOX_FILE_NAME: &str = "inquiries.json";

/// Runtime site configuration with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SiteConfig {
    active_section_policy: ActivePolicy,
    active_threshold: f32,
    assets_dir: PathBuf,
    outbox_path: PathBuf,
}

impl SiteConfig {
    pub(crate) fn active_section_policy(&self) -> ActivePolicy {
        self.active_section_policy
    }

    /// Visible fraction a section needs to count as intersecting.
    pub(crate) fn active_threshold(&self) -> f32 {
        self.active_threshold
    }

    pub(crate) fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub(crate) fn outbox_path(&self) -> &Path {
        &self.outbox_path
    }

    /// Build a config from the on-disk representation, filling defaults.
    pub(super) fn from_file(file: SiteConfigFile, config_dir: &Path) -> Self {
        let active_threshold = file
            .active_threshold
            .filter(|value| !value.is_nan())
            .map(|value| value.clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_ACTIVE_THRESHOLD);

        Self {
            active_section_policy: file
                .active_section_policy
                .unwrap_or_default(),
            active_threshold,
            assets_dir: file
                .assets_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            outbox_path: file
                .outbox_path
                .unwrap_or_else(|| config_dir.join(OUTBOX_FILE_NAME)),
        }
    }

    /// Defaults with the outbox placed in `config_dir`.
    pub(crate) fn defaults_in(config_dir: &Path) -> Self {
        Self::from_file(SiteConfigFile::default(), config_dir)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::defaults_in(&super::storage::config_dir())
    }
}

/// On-disk shape of `site.json`. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct SiteConfigFile {
    pub(super) active_section_policy: Option<ActivePolicy>,
    pub(super) active_threshold: Option<f32>,
    pub(super) assets_dir: Option<PathBuf>,
    pub(super) outbox_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{SiteConfig, SiteConfigFile};
    use crate::widgets::tracker::ActivePolicy;

    #[test]
    fn given_empty_file_when_converted_then_defaults_apply() {
        let config =
            SiteConfig::from_file(SiteConfigFile::default(), Path::new("/cfg"));

        assert_eq!(config.active_section_policy(), ActivePolicy::LastWriteWins);
        assert_eq!(config.active_threshold(), 0.5);
        assert_eq!(config.assets_dir(), Path::new("assets"));
        assert_eq!(config.outbox_path(), Path::new("/cfg/inquiries.json"));
    }

    #[test]
    fn given_out_of_range_threshold_when_converted_then_clamps() {
        let file = SiteConfigFile {
            active_threshold: Some(1.7),
            ..SiteConfigFile::default()
        };
        let config = SiteConfig::from_file(file, Path::new("/cfg"));
        assert_eq!(config.active_threshold(), 1.0);

        let file = SiteConfigFile {
            active_threshold: Some(f32::NAN),
            ..SiteConfigFile::default()
        };
        let config = SiteConfig::from_file(file, Path::new("/cfg"));
        assert_eq!(config.active_threshold(), 0.5);
    }

    #[test]
    fn given_explicit_fields_when_converted_then_they_override_defaults() {
        let file = SiteConfigFile {
            active_section_policy: Some(ActivePolicy::NearestToCenter),
            active_threshold: Some(0.25),
            assets_dir: Some(PathBuf::from("/srv/canvas")),
            outbox_path: Some(PathBuf::from("/tmp/outbox.json")),
        };

        let config = SiteConfig::from_file(file, Path::new("/cfg"));

        assert_eq!(
            config.active_section_policy(),
            ActivePolicy::NearestToCenter
        );
        assert_eq!(config.active_threshold(), 0.25);
        assert_eq!(config.assets_dir(), Path::new("/srv/canvas"));
        assert_eq!(config.outbox_path(), Path::new("/tmp/outbox.json"));
    }
}
