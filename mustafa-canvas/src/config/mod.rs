mod errors;
mod model;
mod storage;

pub(crate) use model::SiteConfig;
use storage::{SiteConfigLoadStatus, load_site_config};

/// Load the site configuration, falling back to defaults on any failure.
pub(crate) fn load_initial_config() -> SiteConfig {
    match load_site_config() {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                SiteConfigLoadStatus::Loaded => {
                    log::info!("site config loaded");
                },
                SiteConfigLoadStatus::Missing => {
                    log::debug!("site config missing, using defaults");
                },
                SiteConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "site config invalid, using defaults: {message}"
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("site config read failed: {err}");
            SiteConfig::default()
        },
    }
}
