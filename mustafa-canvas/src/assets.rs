use std::collections::HashMap;
use std::path::Path;

use iced::widget::image;

use crate::content::{ARTIST_PHOTO, GALLERY, ImageAsset, LOGO_MARK};

/// Image handles for the assets found on disk at startup.
#[derive(Debug, Clone, Default)]
pub(crate) struct AssetCatalog {
    handles: HashMap<&'static str, image::Handle>,
}

impl AssetCatalog {
    /// Probe every known image under `assets_dir`.
    pub(crate) fn scan(assets_dir: &Path) -> Self {
        let mut handles = HashMap::new();
        let mut missing = 0usize;

        for asset in known_assets() {
            let path = assets_dir.join(asset.path);
            if path.is_file() {
                handles.insert(asset.path, image::Handle::from_path(path));
            } else {
                missing += 1;
                log::debug!("image asset missing: {}", path.display());
            }
        }

        if missing > 0 {
            log::warn!(
                "{missing} image assets missing under {}, rendering placeholders",
                assets_dir.display()
            );
        }

        Self { handles }
    }

    /// Handle for `asset`, or `None` when the placeholder should be drawn.
    pub(crate) fn handle(&self, asset: ImageAsset) -> Option<&image::Handle> {
        self.handles.get(asset.path)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }
}

fn known_assets() -> impl Iterator<Item = ImageAsset> {
    [LOGO_MARK, ARTIST_PHOTO]
        .into_iter()
        .chain(GALLERY.iter().map(|item| item.image))
}
