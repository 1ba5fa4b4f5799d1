//! Block-settings builder, material presets, and tool-rule tracking.
#![forbid(unsafe_code)]

pub mod builder;
pub mod material;
pub mod settings;
pub mod tools;
pub mod types;

// Re-exports for convenience (most callers only touch these)
pub use builder::{BlockSettingsBuilder, SettingsBuilder};
pub use material::{CatalogError, MaterialCatalog, MaterialPreset};
pub use settings::{BlockSettings, DropTableSource, SettingsDelegate, SettingsError};
pub use tools::{ToolEntry, ToolRegistry};
pub use types::{DyeColor, Identifier, IdentifierError, MapColor, SettingsId, SoundGroup, ToolTag};
