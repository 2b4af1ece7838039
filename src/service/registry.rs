//! In-memory map of locked channels backed by a `Store`.
//!
//! The registry is the only writer of lock state. Callers that mutate a channel's
//! lock and then touch Discord hold the channel guard from `LockRegistry::guard`
//! for the whole sequence so a concurrent lock and unlock of the same channel
//! cannot interleave.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::{mapref::entry::Entry, DashMap};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    data::store::Store,
    error::AppError,
    model::lock::{LockEntry, LockOutcome, UnlockOutcome},
};

pub struct LockRegistry {
    entries: DashMap<u64, LockEntry>,
    guards: DashMap<u64, Arc<Mutex<()>>>,
    store: Arc<dyn Store>,
}

impl LockRegistry {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            entries: DashMap::new(),
            guards: DashMap::new(),
            store,
        }
    }

    /// Waits for exclusive access to a channel's lock state.
    pub async fn guard(&self, channel_id: u64) -> OwnedMutexGuard<()> {
        let mutex = self.guards.entry(channel_id).or_default().value().clone();
        mutex.lock_owned().await
    }

    /// Inserts an entry unless the channel is already locked, then persists it.
    ///
    /// An existing entry is left untouched, so re-locking never extends the timer.
    ///
    /// # Returns
    /// - `Ok(LockOutcome::Locked)` - Entry inserted and persisted
    /// - `Ok(LockOutcome::AlreadyLocked)` - Channel was locked; carries the existing entry
    /// - `Err(AppError)` - Persisting failed; the insert was rolled back
    pub async fn try_lock(&self, entry: LockEntry) -> Result<LockOutcome, AppError> {
        match self.entries.entry(entry.channel_id) {
            Entry::Occupied(existing) => {
                return Ok(LockOutcome::AlreadyLocked(existing.get().clone()));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(entry.clone());
            }
        }

        if let Err(e) = self.store.save_lock(&entry).await {
            self.entries.remove(&entry.channel_id);
            return Err(e);
        }

        Ok(LockOutcome::Locked(entry))
    }

    /// Removes a channel's entry and its persisted row.
    ///
    /// A failed row delete is logged but does not resurrect the entry; durable
    /// recovery releases the leftover row once it is stale.
    pub async fn unlock(&self, channel_id: u64) -> UnlockOutcome {
        let Some((_, entry)) = self.entries.remove(&channel_id) else {
            return UnlockOutcome::NotLocked;
        };

        if let Err(e) = self.store.delete_lock(channel_id).await {
            tracing::error!(
                "Failed to delete persisted lock for channel {}: {}",
                channel_id,
                e
            );
        }

        UnlockOutcome::Unlocked(entry)
    }

    /// Places a recovered entry back into the map without persisting it again.
    ///
    /// Returns `false` if the channel already had an entry.
    pub fn restore(&self, entry: LockEntry) -> bool {
        match self.entries.entry(entry.channel_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
                true
            }
        }
    }

    /// Persists an entry reconstructed from a non-durable source.
    pub async fn persist(&self, entry: &LockEntry) -> Result<(), AppError> {
        self.store.save_lock(entry).await
    }

    /// Deletes a persisted row that never made it into the map.
    pub async fn discard_persisted(&self, channel_id: u64) -> Result<(), AppError> {
        self.store.delete_lock(channel_id).await
    }

    pub fn get(&self, channel_id: u64) -> Option<LockEntry> {
        self.entries.get(&channel_id).map(|e| e.value().clone())
    }

    pub fn is_locked(&self, channel_id: u64) -> bool {
        self.entries.contains_key(&channel_id)
    }

    /// Snapshot of every entry, soonest expiry first.
    pub fn list_locked(&self) -> Vec<LockEntry> {
        let mut entries: Vec<LockEntry> = self.entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| (e.unlock_at, e.channel_id));
        entries
    }

    /// Snapshot of one guild's entries, soonest expiry first.
    pub fn list_locked_in(&self, guild_id: u64) -> Vec<LockEntry> {
        let mut entries = self.list_locked();
        entries.retain(|e| e.guild_id == guild_id);
        entries
    }

    /// Entries whose `unlock_at` is at or before `now`.
    pub fn expired(&self, now: DateTime<Utc>) -> Vec<LockEntry> {
        let mut entries = self.list_locked();
        entries.retain(|e| e.is_expired(now));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serenity::async_trait;

    use super::*;
    use crate::{
        data::store::MemoryStore,
        model::{
            blacklist::{Blacklist, BlacklistEntry, BlacklistScope},
            server_config::ServerConfig,
            trigger::TriggerKeyword,
        },
    };

    /// Store whose lock writes always fail.
    struct BrokenStore;

    #[async_trait]
    impl Store for BrokenStore {
        fn is_durable(&self) -> bool {
            true
        }
        async fn save_lock(&self, _: &LockEntry) -> Result<(), AppError> {
            Err(AppError::NotFound("store offline".to_string()))
        }
        async fn delete_lock(&self, _: u64) -> Result<(), AppError> {
            Err(AppError::NotFound("store offline".to_string()))
        }
        async fn load_locks(&self) -> Result<Vec<LockEntry>, AppError> {
            Ok(Vec::new())
        }
        async fn add_blacklist(&self, _: BlacklistEntry) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn remove_blacklist(&self, _: BlacklistEntry) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn is_blacklisted(&self, _: BlacklistScope) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn blacklist(&self, _: u64) -> Result<Blacklist, AppError> {
            Ok(Blacklist::default())
        }
        async fn server_config(&self, _: u64) -> Result<Option<ServerConfig>, AppError> {
            Ok(None)
        }
        async fn save_server_config(&self, _: &ServerConfig) -> Result<(), AppError> {
            Ok(())
        }
        async fn triggers(&self) -> Result<Vec<TriggerKeyword>, AppError> {
            Ok(Vec::new())
        }
        async fn add_trigger(&self, _: &TriggerKeyword) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn remove_trigger(&self, _: &str) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn set_trigger_enabled(&self, _: &str, _: bool) -> Result<bool, AppError> {
            Ok(false)
        }
    }

    fn registry() -> LockRegistry {
        LockRegistry::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn relock_keeps_original_expiry() -> Result<(), AppError> {
        let registry = registry();
        let now = Utc::now();

        let first = registry.try_lock(LockEntry::new(1, 9, 12, now)).await?;
        let second = registry
            .try_lock(LockEntry::new(1, 9, 48, now + Duration::hours(1)))
            .await?;

        let original = LockEntry::new(1, 9, 12, now);
        assert_eq!(first, LockOutcome::Locked(original.clone()));
        assert_eq!(second, LockOutcome::AlreadyLocked(original.clone()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(1), Some(original));

        Ok(())
    }

    #[tokio::test]
    async fn unlock_of_unlocked_channel_reports_not_locked() {
        let registry = registry();

        assert_eq!(registry.unlock(1).await, UnlockOutcome::NotLocked);
    }

    #[tokio::test]
    async fn failed_persist_rolls_back_insert() {
        let registry = LockRegistry::new(Arc::new(BrokenStore));

        let result = registry.try_lock(LockEntry::new(1, 9, 12, Utc::now())).await;

        assert!(result.is_err());
        assert!(!registry.is_locked(1));
    }

    #[tokio::test]
    async fn unlock_removes_entry_even_if_store_fails() {
        let registry = LockRegistry::new(Arc::new(BrokenStore));
        registry.restore(LockEntry::new(1, 9, 12, Utc::now()));

        let outcome = registry.unlock(1).await;

        assert!(matches!(outcome, UnlockOutcome::Unlocked(_)));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn lock_persists_to_store() -> Result<(), AppError> {
        let store = Arc::new(MemoryStore::new());
        let registry = LockRegistry::new(store.clone());

        registry.try_lock(LockEntry::new(1, 9, 12, Utc::now())).await?;
        assert_eq!(store.load_locks().await?.len(), 1);

        registry.unlock(1).await;
        assert!(store.load_locks().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn listings_are_sorted_and_scoped() -> Result<(), AppError> {
        let registry = registry();
        let now = Utc::now();

        registry.try_lock(LockEntry::new(1, 100, 5, now)).await?;
        registry.try_lock(LockEntry::new(2, 200, 1, now)).await?;
        registry.try_lock(LockEntry::new(3, 100, 2, now)).await?;

        let all: Vec<u64> = registry.list_locked().iter().map(|e| e.channel_id).collect();
        assert_eq!(all, vec![2, 3, 1]);

        let guild: Vec<u64> = registry
            .list_locked_in(100)
            .iter()
            .map(|e| e.channel_id)
            .collect();
        assert_eq!(guild, vec![3, 1]);

        Ok(())
    }

    #[tokio::test]
    async fn expired_includes_boundary() -> Result<(), AppError> {
        let registry = registry();
        let now = Utc::now();

        registry
            .try_lock(LockEntry::expiring_in(1, 9, Duration::zero(), now))
            .await?;
        registry.try_lock(LockEntry::new(2, 9, 1, now)).await?;

        let expired: Vec<u64> = registry.expired(now).iter().map(|e| e.channel_id).collect();
        assert_eq!(expired, vec![1]);

        Ok(())
    }

    #[tokio::test]
    async fn restore_does_not_overwrite() {
        let registry = registry();
        let now = Utc::now();

        assert!(registry.restore(LockEntry::new(1, 9, 12, now)));
        assert!(!registry.restore(LockEntry::new(1, 9, 1, now)));
        assert_eq!(registry.get(1).map(|e| e.unlock_at), Some(now + Duration::hours(12)));
    }

    #[tokio::test]
    async fn guard_serializes_access() {
        let registry = Arc::new(registry());

        let guard = registry.guard(1).await;
        let contender = {
            let registry = registry.clone();
            tokio::spawn(async move {
                let _guard = registry.guard(1).await;
            })
        };

        tokio::task::yield_now().await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }
}
