use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use super::types::{SettingsId, ToolTag};

/// Mining rules recorded for one settings delegate.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct ToolEntry {
    pub break_by_hand: Option<bool>,
    pub break_by_tool: Vec<(ToolTag, i32)>,
}

impl ToolEntry {
    pub fn set_break_by_hand(&mut self, value: bool) {
        self.break_by_hand = Some(value);
    }

    /// Records the minimum mining level for a tool tag, replacing any
    /// earlier level for the same tag.
    pub fn put_break_by_tool(&mut self, tag: ToolTag, mining_level: i32) {
        if let Some(slot) = self.break_by_tool.iter_mut().find(|(t, _)| *t == tag) {
            slot.1 = mining_level;
        } else {
            self.break_by_tool.push((tag, mining_level));
        }
    }

    pub fn mining_level(&self, tag: &ToolTag) -> Option<i32> {
        self.break_by_tool
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, level)| *level)
    }
}

/// Tool rules keyed by delegate identity. This is a second configuration
/// channel next to the settings object itself; the host consults it when
/// resolving block breaking.
///
/// Population is expected to happen during single-threaded content setup.
#[derive(Default, Debug)]
pub struct ToolRegistry {
    entries: HashMap<SettingsId, ToolEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Rule record for `id`, created empty on first access.
    pub fn entry(&mut self, id: SettingsId) -> &mut ToolEntry {
        self.entries.entry(id).or_default()
    }

    pub fn get(&self, id: SettingsId) -> Option<&ToolEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Process-wide registry used by the builder's tool-rule setters.
    pub fn global() -> &'static Mutex<ToolRegistry> {
        static GLOBAL: OnceLock<Mutex<ToolRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Mutex::new(ToolRegistry::new()))
    }

    /// Locks the global registry, recovering from poisoning (the registry
    /// holds plain data, so a panicking writer cannot leave it half-updated
    /// in a way readers would care about).
    pub fn lock_global() -> std::sync::MutexGuard<'static, ToolRegistry> {
        Self::global()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_created_on_first_access() {
        let mut reg = ToolRegistry::new();
        let id = SettingsId::next();
        assert!(reg.get(id).is_none());
        reg.entry(id).set_break_by_hand(true);
        assert_eq!(reg.get(id).unwrap().break_by_hand, Some(true));
    }

    #[test]
    fn put_break_by_tool_replaces_level_for_same_tag() {
        let mut entry = ToolEntry::default();
        entry.put_break_by_tool(ToolTag::pickaxes(), 0);
        entry.put_break_by_tool(ToolTag::axes(), 2);
        entry.put_break_by_tool(ToolTag::pickaxes(), 3);
        assert_eq!(entry.break_by_tool.len(), 2);
        assert_eq!(entry.mining_level(&ToolTag::pickaxes()), Some(3));
        assert_eq!(entry.mining_level(&ToolTag::axes()), Some(2));
    }
}
