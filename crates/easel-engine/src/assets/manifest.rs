use serde::{Deserialize, Serialize};
use crate::error::EngineError;

/// Asset manifest describing every file the host page preloads for a game.
/// Loaded from a JSON file at runtime.
///
/// Asset indices run over `textures` first, then `audio`, in file order.
/// The host reports load completion by that index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    pub textures: Vec<TextureDescriptor>,
    #[serde(default)]
    pub audio: Vec<AudioDescriptor>,
}

/// Describes a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Lookup key used by game code (e.g., "splat", "brush3").
    pub key: String,
    /// Relative path to the image file.
    pub path: String,
}

/// Describes an audio file (music track or effect).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDescriptor {
    pub key: String,
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::Manifest)
    }

    /// Total number of files the host must load.
    pub fn asset_count(&self) -> usize {
        self.textures.len() + self.audio.len()
    }

    /// Key of the asset at a load index.
    pub fn asset_key(&self, index: usize) -> Option<&str> {
        if let Some(tex) = self.textures.get(index) {
            return Some(&tex.key);
        }
        self.audio
            .get(index.checked_sub(self.textures.len())?)
            .map(|a| a.key.as_str())
    }
}
