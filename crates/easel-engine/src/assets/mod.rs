pub mod manifest;
pub mod progress;
pub mod registry;

use manifest::AssetManifest;
use progress::LoadProgress;
use registry::TextureRegistry;

/// Everything the engine knows about host-loaded assets.
#[derive(Debug, Default)]
pub struct AssetState {
    pub manifest: Option<AssetManifest>,
    pub textures: TextureRegistry,
    pub progress: LoadProgress,
}

impl AssetState {
    /// Install a parsed manifest. Resets load progress.
    pub fn install(&mut self, manifest: AssetManifest) {
        self.textures = TextureRegistry::from_manifest(&manifest);
        self.progress = LoadProgress::new(manifest.asset_count());
        self.manifest = Some(manifest);
    }

    /// Record that the host finished loading the asset at `index`.
    /// Returns the asset key, if the index is known.
    pub fn mark_loaded(&mut self, index: usize) -> Option<&str> {
        let manifest = self.manifest.as_ref()?;
        let key = manifest.asset_key(index)?;
        self.progress.mark(index, key);
        Some(key)
    }
}
