use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::types::{MapColor, SoundGroup};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read materials file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse materials file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default values a fresh settings object is seeded with.
#[derive(Clone, Debug, Deserialize)]
pub struct MaterialPreset {
    #[serde(default)]
    pub map_color: MapColor,
    #[serde(default = "default_collidable")]
    pub collidable: bool,
    #[serde(default = "SoundGroup::stone")]
    pub sound_group: SoundGroup,
    #[serde(default)]
    pub luminance: u8,
    #[serde(default)]
    pub hardness: f32,
    #[serde(default)]
    pub resistance: f32,
    #[serde(default)]
    pub random_ticks: bool,
    #[serde(default = "default_friction")]
    pub friction: f32,
}

fn default_collidable() -> bool {
    true
}

fn default_friction() -> f32 {
    0.6
}

impl Default for MaterialPreset {
    fn default() -> Self {
        Self {
            map_color: MapColor::NONE,
            collidable: true,
            sound_group: SoundGroup::stone(),
            luminance: 0,
            hardness: 0.0,
            resistance: 0.0,
            random_ticks: false,
            friction: 0.6,
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    presets: HashMap<String, MaterialPreset>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MaterialPreset> {
        self.presets.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, preset: MaterialPreset) {
        self.presets.insert(key.into(), preset);
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Keys in sorted order, so callers iterating the catalog are deterministic.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.presets.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut catalog = MaterialCatalog::new();
        for (key, entry) in cfg.materials {
            let preset = match entry {
                // Simple: material = <map color index>
                MaterialEntry::Color(c) => MaterialPreset {
                    map_color: MapColor(c),
                    ..MaterialPreset::default()
                },
                // Detailed: material = { map_color = 11, hardness = 1.5, ... }
                MaterialEntry::Detail(p) => p,
            };
            catalog.presets.insert(key, preset);
        }
        log::debug!(target: "blocks", "loaded {} material presets", catalog.presets.len());
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Stock presets so the library is usable without a config file.
    pub fn builtin() -> Self {
        let mut catalog = MaterialCatalog::new();
        catalog.insert(
            "stone",
            MaterialPreset {
                map_color: MapColor::STONE,
                hardness: 1.5,
                resistance: 6.0,
                ..MaterialPreset::default()
            },
        );
        catalog.insert(
            "wood",
            MaterialPreset {
                map_color: MapColor::WOOD,
                sound_group: SoundGroup::wood(),
                hardness: 2.0,
                resistance: 3.0,
                ..MaterialPreset::default()
            },
        );
        catalog.insert(
            "soil",
            MaterialPreset {
                map_color: MapColor::DIRT,
                sound_group: SoundGroup::grass(),
                hardness: 0.5,
                resistance: 0.5,
                random_ticks: true,
                ..MaterialPreset::default()
            },
        );
        catalog.insert(
            "metal",
            MaterialPreset {
                map_color: MapColor::IRON,
                sound_group: SoundGroup::metal(),
                hardness: 5.0,
                resistance: 6.0,
                ..MaterialPreset::default()
            },
        );
        catalog.insert(
            "glass",
            MaterialPreset {
                sound_group: SoundGroup::glass(),
                hardness: 0.3,
                resistance: 0.3,
                ..MaterialPreset::default()
            },
        );
        catalog.insert(
            "air",
            MaterialPreset {
                collidable: false,
                ..MaterialPreset::default()
            },
        );
        catalog
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: HashMap<String, MaterialEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum MaterialEntry {
    Color(u8),
    Detail(MaterialPreset),
}
