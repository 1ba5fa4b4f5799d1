//! Extension layer for a voxel-game host: block-settings builder,
//! append-only handler registries, and server-startup hook wiring.
//!
//! Each member crate stands alone; this crate only re-exports them under
//! one roof for mods that want a single dependency.
#![forbid(unsafe_code)]

pub use quarry_blocks::{
    BlockSettings, BlockSettingsBuilder, CatalogError, DropTableSource, DyeColor, Identifier,
    IdentifierError, MapColor, MaterialCatalog, MaterialPreset, SettingsBuilder, SettingsDelegate,
    SettingsError, SettingsId, SoundGroup, ToolEntry, ToolRegistry, ToolTag,
};
pub use quarry_hooks::{
    HookPoint, ModPackSupplier, PackContributor, PackDescriptor, PackManager, PackSupplier,
    SERVER_STARTUP, on_server_start, register_contributor,
};
pub use quarry_registry::{HandlerList, RegistryError};
