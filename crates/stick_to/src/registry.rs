use crate::element::StickyElement;
use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A sticky element shared between its owner and the registry.
pub type SharedSticky = Rc<RefCell<StickyElement>>;

/// Named sticky elements, for out-of-band inspection by other components.
///
/// Owned by whoever mounts the sticky elements and passed by reference;
/// entries live exactly as long as the mounted element that inserted them.
#[derive(Debug, Default)]
pub struct StickyRegistry {
    entries: HashMap<String, SharedSticky>,
}

impl StickyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sticky` under `name`, replacing any previous entry.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        sticky: SharedSticky,
    ) -> Option<SharedSticky> {
        let name = name.into();
        let previous = self.entries.insert(name.clone(), sticky);
        if previous.is_some() {
            warn!("sticky element {name:?} registered twice, replacing the earlier one");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<SharedSticky> {
        self.entries.get(name).cloned()
    }

    pub fn remove(&mut self, name: &str) -> Option<SharedSticky> {
        self.entries.remove(name)
    }

    /// Remove `name` only if it still refers to `sticky`.
    pub fn remove_if_same(&mut self, name: &str, sticky: &SharedSticky) -> bool {
        if self.entries.get(name).is_some_and(|entry| Rc::ptr_eq(entry, sticky)) {
            self.entries.remove(name);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
