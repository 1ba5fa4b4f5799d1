//! Append-only handler registration lists.
#![forbid(unsafe_code)]

use std::slice;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The exact same handler reference was registered twice. This is a
    /// programming error in the registering mod, not a transient condition.
    #[error("handler already registered")]
    DuplicateRegistration,
}

/// Ordered, duplicate-free list of registered handlers.
///
/// Handlers are compared by reference identity (`Arc::ptr_eq`), not by
/// value; two equal handlers behind distinct allocations both register.
/// `register` scans the whole list before appending, so it is O(n) in the
/// current size. That is fine for what this is used for: small registries
/// populated once during single-threaded startup and read-only afterwards.
/// There is no unregister; the list only grows for the process lifetime.
pub struct HandlerList<T: ?Sized> {
    handlers: Vec<Arc<T>>,
}

impl<T: ?Sized> Default for HandlerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> HandlerList<T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends `handler`, preserving insertion order. Fails if this exact
    /// reference is already present.
    pub fn register(&mut self, handler: Arc<T>) -> Result<(), RegistryError> {
        if self.handlers.iter().any(|h| Arc::ptr_eq(h, &handler)) {
            return Err(RegistryError::DuplicateRegistration);
        }
        log::debug!(target: "registry", "registered handler #{}", self.handlers.len());
        self.handlers.push(handler);
        Ok(())
    }

    /// Read-only view of the backing storage, in insertion order. Cheap
    /// enough for hot consumers to walk every call.
    #[inline]
    pub fn handlers(&self) -> &[Arc<T>] {
        &self.handlers
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<T>> {
        self.handlers.iter()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a HandlerList<T> {
    type Item = &'a Arc<T>;
    type IntoIter = slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.handlers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter {
        fn greet(&self) -> String;
    }

    struct Fixed(&'static str);

    impl Greeter for Fixed {
        fn greet(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn duplicate_reference_is_rejected_once_present() {
        let mut list: HandlerList<dyn Greeter> = HandlerList::new();
        let a: Arc<dyn Greeter> = Arc::new(Fixed("a"));
        list.register(a.clone()).unwrap();
        assert_eq!(
            list.register(a.clone()),
            Err(RegistryError::DuplicateRegistration)
        );
        // still exactly one instance present
        assert_eq!(list.len(), 1);
        assert!(Arc::ptr_eq(&list.handlers()[0], &a));
    }

    #[test]
    fn identity_not_value_equality() {
        let mut list: HandlerList<dyn Greeter> = HandlerList::new();
        // equal values, distinct allocations
        list.register(Arc::new(Fixed("same"))).unwrap();
        list.register(Arc::new(Fixed("same"))).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut list: HandlerList<dyn Greeter> = HandlerList::new();
        list.register(Arc::new(Fixed("a"))).unwrap();
        list.register(Arc::new(Fixed("b"))).unwrap();
        list.register(Arc::new(Fixed("c"))).unwrap();
        let greetings: Vec<String> = list.iter().map(|h| h.greet()).collect();
        assert_eq!(greetings, vec!["a", "b", "c"]);
    }
}
