use thiserror::Error;

use super::material::MaterialPreset;
use super::types::{Identifier, MapColor, SettingsId, SoundGroup};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown material {0:?}")]
    UnknownMaterial(String),
}

/// Capability a settings object must support to be driven by
/// [`SettingsBuilder`](crate::builder::SettingsBuilder).
///
/// The builder forwards every chained call through this trait, so a host
/// settings type only has to implement it once to pick up the whole fluent
/// surface. A type that lacks the capability fails at the trait bound.
pub trait SettingsDelegate: Sized {
    /// Fresh settings seeded from a material preset. Host-side validation
    /// failures propagate out of here.
    fn from_material(preset: &MaterialPreset) -> Result<Self, SettingsError>;

    /// Duplicate of `base`. The copy gets its own identity; tool rules
    /// recorded against `base` are not inherited.
    fn copy_of(base: &Self) -> Self;

    /// Identity handle keying per-delegate state such as tool rules.
    fn id(&self) -> SettingsId;

    fn set_map_color(&mut self, color: MapColor);
    fn set_collidable(&mut self, value: bool);
    fn set_sound_group(&mut self, group: SoundGroup);
    fn set_luminance(&mut self, value: u8);
    fn set_hardness(&mut self, value: f32);
    fn set_resistance(&mut self, value: f32);
    fn set_random_ticks(&mut self, value: bool);
    fn set_friction(&mut self, value: f32);
    fn set_drop_table(&mut self, id: Identifier);
}

/// Anything whose drop-table reference can be copied onto other settings.
pub trait DropTableSource {
    fn drop_table_id(&self) -> Identifier;
}

/// Host-facing block settings: the concrete delegate the builder wraps by
/// default. Fields are private; the host reads the finished values through
/// the getters when it constructs the block.
#[derive(Clone, Debug)]
pub struct BlockSettings {
    id: SettingsId,
    map_color: MapColor,
    collidable: bool,
    sound_group: SoundGroup,
    luminance: u8,
    hardness: f32,
    resistance: f32,
    random_ticks: bool,
    friction: f32,
    // None = the host derives the drop table from the block's own id.
    drop_table: Option<Identifier>,
}

impl BlockSettings {
    #[inline]
    pub fn map_color(&self) -> MapColor {
        self.map_color
    }

    #[inline]
    pub fn collidable(&self) -> bool {
        self.collidable
    }

    #[inline]
    pub fn sound_group(&self) -> &SoundGroup {
        &self.sound_group
    }

    #[inline]
    pub fn luminance(&self) -> u8 {
        self.luminance
    }

    #[inline]
    pub fn hardness(&self) -> f32 {
        self.hardness
    }

    #[inline]
    pub fn resistance(&self) -> f32 {
        self.resistance
    }

    #[inline]
    pub fn random_ticks(&self) -> bool {
        self.random_ticks
    }

    #[inline]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Explicit drop-table reference, if one was set.
    #[inline]
    pub fn drop_table(&self) -> Option<&Identifier> {
        self.drop_table.as_ref()
    }
}

impl SettingsDelegate for BlockSettings {
    fn from_material(preset: &MaterialPreset) -> Result<Self, SettingsError> {
        Ok(Self {
            id: SettingsId::next(),
            map_color: preset.map_color,
            collidable: preset.collidable,
            sound_group: preset.sound_group.clone(),
            luminance: preset.luminance,
            hardness: preset.hardness,
            resistance: preset.resistance,
            random_ticks: preset.random_ticks,
            friction: preset.friction,
            drop_table: None,
        })
    }

    fn copy_of(base: &Self) -> Self {
        Self {
            id: SettingsId::next(),
            ..base.clone()
        }
    }

    #[inline]
    fn id(&self) -> SettingsId {
        self.id
    }

    fn set_map_color(&mut self, color: MapColor) {
        self.map_color = color;
    }

    fn set_collidable(&mut self, value: bool) {
        self.collidable = value;
    }

    fn set_sound_group(&mut self, group: SoundGroup) {
        self.sound_group = group;
    }

    fn set_luminance(&mut self, value: u8) {
        self.luminance = value;
    }

    fn set_hardness(&mut self, value: f32) {
        self.hardness = value;
    }

    fn set_resistance(&mut self, value: f32) {
        self.resistance = value;
    }

    fn set_random_ticks(&mut self, value: bool) {
        self.random_ticks = value;
    }

    fn set_friction(&mut self, value: f32) {
        self.friction = value;
    }

    fn set_drop_table(&mut self, id: Identifier) {
        self.drop_table = Some(id);
    }
}

impl DropTableSource for BlockSettings {
    fn drop_table_id(&self) -> Identifier {
        self.drop_table
            .clone()
            .unwrap_or_else(Identifier::empty_drop_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialCatalog;

    #[test]
    fn from_material_seeds_every_attribute() {
        let catalog = MaterialCatalog::builtin();
        let metal = catalog.get("metal").unwrap();
        let s = BlockSettings::from_material(metal).unwrap();
        assert_eq!(s.map_color(), metal.map_color);
        assert_eq!(s.collidable(), metal.collidable);
        assert_eq!(s.sound_group(), &metal.sound_group);
        assert_eq!(s.luminance(), metal.luminance);
        assert_eq!(s.hardness(), metal.hardness);
        assert_eq!(s.resistance(), metal.resistance);
        assert_eq!(s.random_ticks(), metal.random_ticks);
        assert_eq!(s.friction(), metal.friction);
        assert!(s.drop_table().is_none());
    }

    #[test]
    fn copies_share_values_but_not_identity() {
        let catalog = MaterialCatalog::builtin();
        let base = BlockSettings::from_material(catalog.get("stone").unwrap()).unwrap();
        let copy = BlockSettings::copy_of(&base);
        assert_eq!(copy.hardness(), base.hardness());
        assert_eq!(copy.map_color(), base.map_color());
        assert_ne!(copy.id(), base.id());
    }
}
