//! End-to-end pass over the whole extension layer, the way a mod's
//! content-initialization phase would use it.

use std::path::PathBuf;
use std::sync::Arc;

use quarry::{
    BlockSettingsBuilder, DyeColor, HandlerList, Identifier, MaterialCatalog, PackContributor,
    PackDescriptor, PackManager, RegistryError, SettingsDelegate, ToolRegistry, ToolTag,
    on_server_start, register_contributor,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn content_setup_pass() {
    init_logging();
    let catalog = MaterialCatalog::builtin();

    let ore = BlockSettingsBuilder::create_named(&catalog, "stone")
        .unwrap()
        .material_color(DyeColor::LightBlue)
        .strength(3.0, 3.0)
        .luminance(4)
        .break_by_tool_level(ToolTag::pickaxes(), 2)
        .drop_table(Identifier::short("drops/ore").unwrap())
        .build();

    assert_eq!(ore.map_color(), DyeColor::LightBlue.map_color());
    assert_eq!(ore.luminance(), 4);
    let tools = ToolRegistry::lock_global();
    let entry = tools.get(ore.id()).unwrap();
    assert_eq!(entry.mining_level(&ToolTag::pickaxes()), Some(2));
}

#[test]
fn handler_list_usable_for_arbitrary_capabilities() {
    init_logging();
    let mut on_break: HandlerList<dyn Fn(&str) -> bool> = HandlerList::new();
    let veto: Arc<dyn Fn(&str) -> bool> = Arc::new(|name: &str| name != "protected");
    on_break.register(veto.clone()).unwrap();
    assert_eq!(
        on_break.register(veto),
        Err(RegistryError::DuplicateRegistration)
    );
    assert!(on_break.handlers()[0]("plain"));
    assert!(!on_break.handlers()[0]("protected"));
}

struct WorldgenPacks;

impl PackContributor for WorldgenPacks {
    fn data_packs(&self) -> Vec<PackDescriptor> {
        vec![PackDescriptor {
            id: Identifier::short("worldgen").unwrap(),
            display_name: "Extra Worldgen".to_string(),
            root: PathBuf::from("mods/worldgen/data"),
        }]
    }
}

#[test]
fn startup_hook_exposes_mod_packs_to_the_host() {
    init_logging();
    register_contributor(Arc::new(WorldgenPacks)).unwrap();

    // What the host does at the hook point, before its own registration.
    let mut manager = PackManager::new();
    on_server_start(&mut manager);

    let packs = manager.enumerate();
    assert!(packs.iter().any(|p| p.display_name == "Extra Worldgen"));
}
