//! Server-startup hook wiring for mod-provided data packs.
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use quarry_blocks::Identifier;
use quarry_registry::{HandlerList, RegistryError};

/// Static description of where the host invokes a hook: which method of
/// which host type, and which call inside it the hook runs before
/// (`ordinal` counts matches of `before_call`, zero-based).
///
/// Hosts that expose lifecycle hooks look these up to wire the right
/// callback at the right moment; the descriptor itself carries no behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HookPoint {
    pub target: &'static str,
    pub method: &'static str,
    pub before_call: &'static str,
    pub ordinal: usize,
}

/// Where [`on_server_start`] runs: inside world-data-pack loading, before
/// the second supplier registration the host performs itself.
pub const SERVER_STARTUP: HookPoint = HookPoint {
    target: "Server",
    method: "load_world_data_packs",
    before_call: "PackManager::register_supplier",
    ordinal: 1,
};

/// One discoverable data pack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackDescriptor {
    pub id: Identifier,
    pub display_name: String,
    pub root: PathBuf,
}

/// Capability the host's pack manager consumes: something that can be
/// asked for the packs it supplies.
pub trait PackSupplier {
    fn packs(&self) -> Vec<PackDescriptor>;
}

/// Implemented by mods that ship data packs. Contributors are registered
/// once during mod initialization and enumerated at server startup.
pub trait PackContributor: Send + Sync {
    fn data_packs(&self) -> Vec<PackDescriptor>;
}

/// Process-wide contributor list, populated during single-threaded mod
/// initialization.
fn contributors() -> &'static Mutex<HandlerList<dyn PackContributor>> {
    static CONTRIBUTORS: OnceLock<Mutex<HandlerList<dyn PackContributor>>> = OnceLock::new();
    CONTRIBUTORS.get_or_init(|| Mutex::new(HandlerList::new()))
}

fn lock_contributors() -> MutexGuard<'static, HandlerList<dyn PackContributor>> {
    contributors()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Registers a mod's pack contributor. Registering the same reference
/// twice is a programming error and fails accordingly.
pub fn register_contributor(contributor: Arc<dyn PackContributor>) -> Result<(), RegistryError> {
    lock_contributors().register(contributor)
}

/// Supplier handing the host every pack contributed by loaded mods.
pub struct ModPackSupplier {
    contributors: Vec<Arc<dyn PackContributor>>,
}

impl ModPackSupplier {
    /// Snapshots the process-wide contributor list.
    pub fn new() -> Self {
        Self::from_list(&lock_contributors())
    }

    pub fn from_list(list: &HandlerList<dyn PackContributor>) -> Self {
        Self {
            contributors: list.handlers().to_vec(),
        }
    }
}

impl Default for ModPackSupplier {
    fn default() -> Self {
        Self::new()
    }
}

impl PackSupplier for ModPackSupplier {
    fn packs(&self) -> Vec<PackDescriptor> {
        self.contributors
            .iter()
            .flat_map(|c| c.data_packs())
            .collect()
    }
}

/// Minimal seam standing in for the host's pack manager.
#[derive(Default)]
pub struct PackManager {
    suppliers: Vec<Box<dyn PackSupplier>>,
}

impl PackManager {
    pub fn new() -> Self {
        Self {
            suppliers: Vec::new(),
        }
    }

    pub fn register_supplier(&mut self, supplier: Box<dyn PackSupplier>) {
        self.suppliers.push(supplier);
    }

    pub fn enumerate(&self) -> Vec<PackDescriptor> {
        self.suppliers.iter().flat_map(|s| s.packs()).collect()
    }
}

/// The [`SERVER_STARTUP`] hook body. The host calls this exactly once,
/// synchronously, on its own thread; it registers the mod data-pack
/// supplier and returns. Must not block or spawn work.
pub fn on_server_start(manager: &mut PackManager) {
    let supplier = ModPackSupplier::new();
    log::debug!(
        target: "hooks",
        "registering mod data-pack supplier ({} contributors)",
        supplier.contributors.len()
    );
    manager.register_supplier(Box::new(supplier));
}
