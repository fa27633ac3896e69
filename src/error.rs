use core::fmt::Debug;

/// The error returned by [`HybridRegistry::try_set`] when a new key would not
/// fit.
///
/// A registry never grows on its own. Callers are expected to check
/// [`needs_growth`] and [`grow`] before inserting, so this error reports a
/// broken caller contract, not an inconsistent table. The rejected key and
/// value are handed back untouched.
///
/// [`HybridRegistry::try_set`]: crate::HybridRegistry::try_set
/// [`needs_growth`]: crate::HybridRegistry::needs_growth
/// [`grow`]: crate::HybridRegistry::grow
#[derive(thiserror::Error)]
#[error("hybrid registry is full ({capacity} entries); grow it before inserting new keys")]
pub struct CapacityError<K, V> {
    key: K,
    value: V,
    capacity: usize,
}

impl<K, V> CapacityError<K, V> {
    pub(crate) fn new(key: K, value: V, capacity: usize) -> Self {
        Self {
            key,
            value,
            capacity,
        }
    }

    /// The key that was rejected.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value that was rejected.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Capacity of the registry that rejected the insert.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the rejected key and value.
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Debug for CapacityError<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
