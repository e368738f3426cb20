//! RwLock-guarded map implementation of the link store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;

/// Process-local link store.
///
/// A plain `HashMap` behind an `RwLock`: reads take the shared lock, the
/// duplicate-check-then-insert takes the exclusive lock so allocation stays
/// atomic in a multi-threaded runtime.
#[derive(Default)]
pub struct InMemoryLinkStore {
    links: RwLock<HashMap<String, String>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for InMemoryLinkStore {
    fn insert_if_absent(&self, code: &str, target_url: &str) -> bool {
        let mut links = self.links.write().expect("link store lock poisoned");

        match links.entry(code.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(target_url.to_string());
                true
            }
        }
    }

    fn get(&self, code: &str) -> Option<String> {
        let links = self.links.read().expect("link store lock poisoned");
        links.get(code).cloned()
    }

    fn snapshot(&self) -> Vec<ShortLink> {
        let links = self.links.read().expect("link store lock poisoned");
        links
            .iter()
            .map(|(code, url)| ShortLink::new(code.clone(), url.clone()))
            .collect()
    }

    fn len(&self) -> usize {
        let links = self.links.read().expect("link store lock poisoned");
        links.len()
    }
}
