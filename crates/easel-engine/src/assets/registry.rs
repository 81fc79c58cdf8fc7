use std::collections::HashMap;
use crate::api::types::TextureId;
use crate::assets::manifest::AssetManifest;

/// Name → texture id lookup built from an AssetManifest.
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    ids: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids follow manifest order, starting at 1 (0 is `TextureId::SOLID`).
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let ids = manifest
            .textures
            .iter()
            .enumerate()
            .map(|(i, tex)| (tex.key.clone(), TextureId(i as u32 + 1)))
            .collect();
        Self { ids }
    }

    pub fn get(&self, key: &str) -> Option<TextureId> {
        self.ids.get(key).copied()
    }

    /// Look up a texture, falling back to a solid quad when the key is unknown.
    pub fn resolve(&self, key: &str) -> TextureId {
        self.get(key).unwrap_or_else(|| {
            log::warn!("texture '{}' missing from manifest, drawing solid quad", key);
            TextureId::SOLID
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_manifest_order() {
        let manifest = AssetManifest::from_json(
            r#"{ "textures": [
                { "key": "easel", "path": "easel.png" },
                { "key": "splat", "path": "splat.png" }
            ] }"#,
        )
        .unwrap();
        let reg = TextureRegistry::from_manifest(&manifest);
        assert_eq!(reg.get("easel"), Some(TextureId(1)));
        assert_eq!(reg.get("splat"), Some(TextureId(2)));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn unknown_resolves_to_solid() {
        let reg = TextureRegistry::new();
        assert_eq!(reg.get("nope"), None);
        assert_eq!(reg.resolve("nope"), TextureId::SOLID);
    }
}
