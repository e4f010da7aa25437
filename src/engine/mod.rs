mod map_api;
mod selection_api;
mod tower_api;

use tokio::sync::{Mutex, RwLock};

use crate::{api::API, config::RECENT_LIMIT, entities::TowerRecord, store::DynStore};

/// Application state: the tower store plus the selection slot.
///
/// Every mutation goes through the API traits implemented on this type.
pub struct Engine {
    store: DynStore,
    selection: RwLock<Option<TowerRecord>>,
    submission: Mutex<()>,
    recent_limit: usize,
}

impl Engine {
    pub fn new(store: DynStore) -> Self {
        Self {
            store,
            selection: RwLock::new(None),
            submission: Mutex::new(()),
            recent_limit: RECENT_LIMIT,
        }
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Self {
        self.recent_limit = recent_limit;
        self
    }
}

impl API for Engine {}
