use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::AppState;

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    // `apply` only swaps in a fully reduced state, so a poisoned lock still holds the last good one.
    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock())
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }
}
