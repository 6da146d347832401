use crate::core::work_item::WorkItem;

/// Callback invoked with the full post-mutation snapshot after every
/// effective store change.
pub type StoreListener = Box<dyn FnMut(&[WorkItem])>;

/// In-memory ordered collection of work items; the single source of truth
/// for the current UI snapshot. Most-recently-created items come first.
///
/// The store does no remote I/O and enforces no referential integrity —
/// only id uniqueness. Mutation happens solely through the sync engine.
#[derive(Default)]
pub struct ItemStore {
    items: Vec<WorkItem>,
    listeners: Vec<StoreListener>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection. Used once at startup with the
    /// externally fetched snapshot.
    pub fn initialize(&mut self, items: Vec<WorkItem>) {
        self.items = items;
        self.notify();
    }

    /// Prepend a new item. Silently ignored if an item with the same id
    /// already exists.
    pub fn insert(&mut self, item: WorkItem) {
        if self.get(&item.id).is_some() {
            log::debug!("store: ignoring duplicate insert of {}", item.id);
            return;
        }
        self.items.insert(0, item);
        self.notify();
    }

    /// Replace the item with the given id. No-op when the id is absent
    /// (the item may have since disappeared).
    pub fn replace(&mut self, id: &str, item: WorkItem) {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(slot) => {
                *slot = item;
                self.notify();
            }
            None => log::debug!("store: replace of absent item {}", id),
        }
    }

    pub fn get(&self, id: &str) -> Option<&WorkItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// The full ordered sequence, insertion order preserved.
    pub fn all(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a change listener. Listeners run synchronously, in
    /// registration order, on every effective mutation.
    pub fn subscribe(&mut self, listener: StoreListener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.items);
        }
    }
}
