use super::material::{MaterialCatalog, MaterialPreset};
use super::settings::{BlockSettings, DropTableSource, SettingsDelegate, SettingsError};
use super::tools::ToolRegistry;
use super::types::{Identifier, MapColor, SoundGroup, ToolTag};

/// Fluent builder over a settings delegate.
///
/// Wraps any [`SettingsDelegate`] and exposes the host's hidden setters as
/// chainable calls. Replace `BlockSettings::from_material(..)` with
/// `BlockSettingsBuilder::create(..)` and finish the chain with `.build()`
/// to get the plain settings object back.
///
/// No validation happens here beyond what the delegate enforces: negative
/// or NaN hardness values pass through uninterpreted.
#[derive(Debug)]
pub struct SettingsBuilder<D: SettingsDelegate> {
    delegate: D,
}

/// Builder over the host-facing [`BlockSettings`] delegate.
pub type BlockSettingsBuilder = SettingsBuilder<BlockSettings>;

impl<D: SettingsDelegate> SettingsBuilder<D> {
    pub fn create(preset: &MaterialPreset) -> Result<Self, SettingsError> {
        Ok(Self {
            delegate: D::from_material(preset)?,
        })
    }

    /// Like [`create`](Self::create), resolving the material by name first.
    pub fn create_named(catalog: &MaterialCatalog, name: &str) -> Result<Self, SettingsError> {
        let preset = catalog
            .get(name)
            .ok_or_else(|| SettingsError::UnknownMaterial(name.to_string()))?;
        log::trace!(target: "blocks", "settings created from material {name:?}");
        Self::create(preset)
    }

    pub fn copy(base: &D) -> Self {
        Self {
            delegate: D::copy_of(base),
        }
    }

    /* TOOL HELPERS */

    // These record into the process-wide ToolRegistry keyed by the
    // delegate's identity, not into the settings object.

    pub fn break_by_hand(self, value: bool) -> Self {
        ToolRegistry::lock_global()
            .entry(self.delegate.id())
            .set_break_by_hand(value);
        self
    }

    /// Breakable by any tool carrying `tag`, at mining level 0.
    pub fn break_by_tool(self, tag: ToolTag) -> Self {
        self.break_by_tool_level(tag, 0)
    }

    pub fn break_by_tool_level(self, tag: ToolTag, mining_level: i32) -> Self {
        ToolRegistry::lock_global()
            .entry(self.delegate.id())
            .put_break_by_tool(tag, mining_level);
        self
    }

    /* DELEGATE WRAPPERS */

    /// Accepts a [`MapColor`] directly or anything resolving to one, such
    /// as a [`DyeColor`](crate::types::DyeColor).
    pub fn material_color(mut self, color: impl Into<MapColor>) -> Self {
        self.delegate.set_map_color(color.into());
        self
    }

    #[deprecated(note = "use `material_color` instead")]
    pub fn map_color(self, color: impl Into<MapColor>) -> Self {
        self.material_color(color)
    }

    pub fn collidable(mut self, value: bool) -> Self {
        self.delegate.set_collidable(value);
        self
    }

    pub fn sound_group(mut self, group: SoundGroup) -> Self {
        self.delegate.set_sound_group(group);
        self
    }

    pub fn luminance(mut self, value: u8) -> Self {
        self.delegate.set_luminance(value);
        self
    }

    pub fn random_ticks(mut self, value: bool) -> Self {
        self.delegate.set_random_ticks(value);
        self
    }

    /// Sets hardness and resistance to the same value. Use
    /// [`strength`](Self::strength) to set them independently.
    pub fn hardness(mut self, value: f32) -> Self {
        self.delegate.set_hardness(value);
        self.delegate.set_resistance(value);
        self
    }

    pub fn resistance(mut self, value: f32) -> Self {
        self.delegate.set_resistance(value);
        self
    }

    pub fn strength(mut self, hardness: f32, resistance: f32) -> Self {
        self.delegate.set_hardness(hardness);
        self.delegate.set_resistance(resistance);
        self
    }

    pub fn friction(mut self, value: f32) -> Self {
        self.delegate.set_friction(value);
        self
    }

    pub fn drop_table(mut self, id: Identifier) -> Self {
        self.delegate.set_drop_table(id);
        self
    }

    /// Points the drop table at the well-known empty sentinel, overriding
    /// any earlier [`drop_table`](Self::drop_table) call.
    pub fn no_drop_table(mut self) -> Self {
        self.delegate.set_drop_table(Identifier::empty_drop_table());
        self
    }

    pub fn copy_drop_table(mut self, source: &impl DropTableSource) -> Self {
        self.delegate.set_drop_table(source.drop_table_id());
        self
    }

    /* BUILDING */

    /// Hands the finished delegate to the caller.
    pub fn build(self) -> D {
        self.delegate
    }

    /// Applies `f` to the finished delegate, for callers that want a
    /// derived value rather than the settings object itself.
    pub fn build_with<T>(self, f: impl FnOnce(D) -> T) -> T {
        f(self.delegate)
    }
}
