pub mod api;

use futures::future::try_join;
use thiserror::Error;

use crate::core::profile::Profile;
use crate::core::work_item::{NewWorkItem, WorkItem, WorkItemPatch};
use crate::store::{ItemStore, StoreListener};
use api::ApiError;

/// The remote data service contract. Implemented by [`api::ApiClient`];
/// tests script outcomes through an in-memory stand-in.
// Callers run on one thread, so no Send bound is required of the futures.
#[allow(async_fn_in_trait)]
pub trait WorkItemService {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError>;
    async fn list_work_items(&self, profile_key: Option<&str>) -> Result<Vec<WorkItem>, ApiError>;
    async fn create_work_item(&self, item: &NewWorkItem) -> Result<WorkItem, ApiError>;
    async fn update_work_item(&self, item: &WorkItem) -> Result<WorkItem, ApiError>;
}

/// A mutation the remote service rejected or that never reached it.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to create work item: {0}")]
    Create(#[source] ApiError),
    #[error("failed to update work item {id}: {source}")]
    Update {
        id: String,
        #[source]
        source: ApiError,
    },
}

/// Failure of an initial page load. Fatal to the affected view; nothing
/// here is retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("unknown profile key: {0}")]
    UnknownProfile(String),
}

/// Everything the cross-profile board needs at startup.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub profiles: Vec<Profile>,
    pub work_items: Vec<WorkItem>,
}

/// Everything a single-profile detail page needs at startup.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub profile: Profile,
    pub work_items: Vec<WorkItem>,
}

/// Fetch profiles and the full work-item collection, concurrently.
pub async fn load_snapshot<S: WorkItemService>(service: &S) -> Result<Snapshot, LoadError> {
    let (profiles, work_items) =
        try_join(service.list_profiles(), service.list_work_items(None)).await?;
    log::info!(
        "loaded snapshot: {} profiles, {} work items",
        profiles.len(),
        work_items.len()
    );
    Ok(Snapshot {
        profiles,
        work_items,
    })
}

/// Fetch one profile and its work items, concurrently.
pub async fn load_profile_snapshot<S: WorkItemService>(
    service: &S,
    profile_key: &str,
) -> Result<ProfileSnapshot, LoadError> {
    let (profiles, work_items) = try_join(
        service.list_profiles(),
        service.list_work_items(Some(profile_key)),
    )
    .await?;
    let profile = profiles
        .into_iter()
        .find(|p| p.key == profile_key)
        .ok_or_else(|| LoadError::UnknownProfile(profile_key.to_string()))?;
    log::info!(
        "loaded profile {}: {} work items",
        profile.key,
        work_items.len()
    );
    Ok(ProfileSnapshot {
        profile,
        work_items,
    })
}

/// Owns the item store and the remote service handle, and runs the
/// optimistic-apply/confirm/rollback protocol. The store is mutated only
/// through this engine; readers get `&ItemStore`.
pub struct SyncEngine<S> {
    service: S,
    store: ItemStore,
}

impl<S: WorkItemService> SyncEngine<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            store: ItemStore::new(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Seed the store with the externally fetched snapshot.
    pub fn initialize(&mut self, items: Vec<WorkItem>) {
        self.store.initialize(items);
    }

    pub fn subscribe(&mut self, listener: StoreListener) {
        self.store.subscribe(listener);
    }

    /// Create a work item. Not optimistic: the id is server-assigned, so
    /// no local row exists until the service confirms. On success the
    /// canonical item is prepended to the store; on failure the store is
    /// untouched.
    pub async fn create(&mut self, item: NewWorkItem) -> Result<WorkItem, SyncError> {
        log::info!(
            "creating work item \"{}\" for profile {}",
            item.title,
            item.profile_key
        );
        match self.service.create_work_item(&item).await {
            Ok(created) => {
                self.store.insert(created.clone());
                Ok(created)
            }
            Err(e) => {
                log::warn!("create failed: {}", e);
                Err(SyncError::Create(e))
            }
        }
    }

    /// Apply a status/priority change optimistically, then confirm it with
    /// the remote service.
    ///
    /// The merged value lands in the store before the request is issued.
    /// On success the store takes the server's canonical value, which may
    /// differ from the optimistic guess; on failure the store reverts to
    /// the pre-optimistic value. An absent id is a silent no-op.
    ///
    /// Two in-flight updates to the same item resolve by response arrival
    /// order: the later arrival wins the stored value, which may not be
    /// the most recently issued request.
    pub async fn update(&mut self, id: &str, patch: WorkItemPatch) -> Result<(), SyncError> {
        let Some(current) = self.store.get(id) else {
            log::debug!("update of absent item {}, skipping", id);
            return Ok(());
        };
        let previous = current.clone();
        let proposed = previous.merged(patch);

        self.store.replace(id, proposed.clone());

        match self.service.update_work_item(&proposed).await {
            Ok(canonical) => {
                self.store.replace(id, canonical);
                Ok(())
            }
            Err(e) => {
                log::warn!("update of {} failed, reverting: {}", id, e);
                self.store.replace(id, previous);
                Err(SyncError::Update {
                    id: id.to_string(),
                    source: e,
                })
            }
        }
    }
}
