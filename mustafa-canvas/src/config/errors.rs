use thiserror::Error;

/// Errors emitted while reading the site configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("site config IO failed")]
    Io(#[from] std::io::Error),
}
