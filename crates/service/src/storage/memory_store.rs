use std::hash::Hash;

use dashmap::DashMap;

/// Generic thread-safe key-value store.
///
/// Backed by a sharded `DashMap`: reads and writes on different keys do not
/// contend, and every per-key mutation (`update`, `upsert_with`) runs while
/// holding that key's shard lock. Iteration order is unspecified.
pub struct InMemoryStore<K, V> {
    inner: DashMap<K, V>,
}

impl<K, V> Default for InMemoryStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self { inner: DashMap::new() }
    }
}

impl<K, V> InMemoryStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the stored value.
    pub fn save(&self, id: K, value: V) -> V {
        self.inner.insert(id, value.clone());
        value
    }

    /// Snapshot of every value.
    pub fn find_all(&self) -> Vec<V> {
        self.inner.iter().map(|e| e.value().clone()).collect()
    }

    pub fn find_by_id(&self, id: &K) -> Option<V> {
        self.inner.get(id).map(|e| e.value().clone())
    }

    pub fn exists_by_id(&self, id: &K) -> bool {
        self.inner.contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.inner.len()
    }

    /// No-op when the key is absent.
    pub fn delete_by_id(&self, id: &K) {
        self.inner.remove(id);
    }

    /// Remove and return the value, if any.
    pub fn remove(&self, id: &K) -> Option<V> {
        self.inner.remove(id).map(|(_, v)| v)
    }

    pub fn delete_all(&self) {
        self.inner.clear();
    }

    /// Mutate an existing value in place under its key lock.
    ///
    /// Returns `None` without calling `f` when the key is absent. `f` must not
    /// touch this store.
    pub fn update<R>(&self, id: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        self.inner.get_mut(id).map(|mut e| f(e.value_mut()))
    }

    /// Mutate the value for `id`, first inserting `V::default()` if absent.
    /// The whole read-modify-write holds the key lock. `f` must not touch
    /// this store.
    pub fn upsert_with<R>(&self, id: K, f: impl FnOnce(&mut V) -> R) -> R
    where
        V: Default,
    {
        let mut entry = self.inner.entry(id).or_default();
        f(entry.value_mut())
    }
}
