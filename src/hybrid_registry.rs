use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::ops::Index;

use crate::error::CapacityError;
use crate::key::RegistryKey;
use crate::prime;

/// Fraction of the table that must be live before growth is signalled.
const LOAD_FACTOR: f32 = 0.72;

/// Growth is only signalled once fewer than this many slots remain free, so
/// large tables are not doubled purely on crossing [`LOAD_FACTOR`].
const GROWTH_SLACK: usize = 100;

/// Clears the sign bit of a 32-bit hash code.
const HASH_CODE_MASK: u32 = 0x7FFF_FFFF;

/// Bucket and chain sentinel marking "no entry".
const VACANT: u32 = u32::MAX;

#[inline(always)]
fn hash_code<K, S>(hash_builder: &S, key: &K) -> u32
where
    K: RegistryKey + ?Sized,
    S: BuildHasher,
{
    match key.hash_key(hash_builder) {
        Some(hash) => hash as u32 & HASH_CODE_MASK,
        None => 0,
    }
}

#[derive(Clone, Copy, Debug)]
struct Capacity {
    size: usize,
}

impl From<usize> for Capacity {
    #[inline(always)]
    fn from(value: usize) -> Self {
        assert!(value <= prime::MAX_PRIME_CAPACITY, "capacity overflow");
        Capacity {
            size: prime::get_prime(value),
        }
    }
}

impl Capacity {
    #[inline(always)]
    fn expand(old_size: usize) -> Self {
        Capacity {
            size: prime::expand_prime(old_size),
        }
    }
}

/// A single slot of the entry array.
///
/// Entries never move once inserted; `next` threads the collision chain of the
/// bucket the entry hashes to.
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    hash_code: u32,
    next: u32,
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// The masked, non-negative hash code of the key.
    pub fn hash_code(&self) -> u32 {
        self.hash_code
    }

    /// Index of the next entry in the same chain, or `None` at the end of the
    /// chain.
    pub fn next(&self) -> Option<usize> {
        (self.next != VACANT).then_some(self.next as usize)
    }

    /// The stored key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The stored value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// A growable, array-backed hash registry using separate chaining.
///
/// `HybridRegistry<K, V, S>` keeps two parallel arrays of the same prime
/// length: a bucket array holding the head of each collision chain, and an
/// entry array holding the key, value, hash code and chain link of each
/// insertion. Entries are appended in insertion order and never move; new
/// keys are linked in at the *head* of their bucket's chain.
///
/// The registry never resizes itself. Reads are total (a missing key yields
/// the registry's default value), and the owner decides when to grow by
/// checking [`needs_growth`] and calling [`grow`].
///
/// [`needs_growth`]: HybridRegistry::needs_growth
/// [`grow`]: HybridRegistry::grow
///
/// ## Example
///
/// ```rust
/// use hybrid_registry::DefaultHashBuilder;
/// use hybrid_registry::HybridRegistry;
///
/// let mut registry: HybridRegistry<&str, u32, DefaultHashBuilder> =
///     HybridRegistry::with_capacity(4);
///
/// for (i, name) in ["alpha", "beta", "gamma"].into_iter().enumerate() {
///     if registry.needs_growth() {
///         registry = registry.grow();
///     }
///     registry.set(name, i as u32);
/// }
///
/// assert_eq!(*registry.get(&"beta"), 1);
/// assert_eq!(registry[&"missing"], 0);
/// ```
///
/// ## Performance Characteristics
///
/// - **Memory**: 4 bytes per bucket plus `8 + size_of::<(K, V)>()` bytes per
///   entry slot, both allocated up front for the full capacity.
/// - **Lookups**: one modulus and a walk of a single chain.
#[derive(Clone)]
pub struct HybridRegistry<K, V, S> {
    buckets: Box<[u32]>,
    entries: Vec<Entry<K, V>>,
    hash_builder: S,
    default: V,
}

impl<K, V, S> Debug for HybridRegistry<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> HybridRegistry<K, V, S> {
    /// Returns the number of live entries.
    ///
    /// This is also the index the next new key will be stored at.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the registry can hold, which is always
    /// prime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let registry: HybridRegistry<u64, u64, DefaultHashBuilder> =
    ///     HybridRegistry::with_capacity(100);
    /// assert_eq!(registry.capacity(), 107);
    /// ```
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns a reference to the registry's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the value [`get`](HybridRegistry::get) yields for keys that
    /// were never set.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Returns `true` when the owner should grow the registry before
    /// inserting more keys.
    ///
    /// Growth is signalled only when fewer than 100 slots are free *and* more
    /// than 72% of the slots are live. A large table can exceed the ratio
    /// while still having plenty of free slots, and a small table can have
    /// fewer than 100 free slots while being mostly empty; neither signals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut registry: HybridRegistry<u64, u64, DefaultHashBuilder> =
    ///     HybridRegistry::with_capacity(100);
    /// assert_eq!(registry.capacity(), 107);
    ///
    /// for key in 0..77 {
    ///     registry.set(key, key);
    /// }
    /// assert!(!registry.needs_growth());
    ///
    /// registry.set(77, 77);
    /// assert!(registry.needs_growth());
    /// ```
    pub fn needs_growth(&self) -> bool {
        let capacity = self.capacity();
        let count = self.len();

        (capacity - count) < GROWTH_SLACK && (count as f32 / capacity as f32) > LOAD_FACTOR
    }

    /// Builds a registry of roughly twice the capacity holding every entry of
    /// `self`.
    ///
    /// The new capacity is the smallest prime at least twice the current
    /// one. Entries keep their slot order; every chain is rebuilt because
    /// the modulus changes. The old arrays are dropped.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut registry: HybridRegistry<u64, &str, DefaultHashBuilder> =
    ///     HybridRegistry::with_capacity(3);
    /// registry.set(1, "one");
    /// registry.set(2, "two");
    ///
    /// let registry = registry.grow();
    /// assert_eq!(registry.capacity(), 7);
    /// assert_eq!(registry.len(), 2);
    /// assert_eq!(registry[&2], "two");
    /// ```
    pub fn grow(mut self) -> Self {
        let capacity = Capacity::expand(self.capacity());
        let entries = core::mem::take(&mut self.entries);

        Self::from_entries(entries, capacity, self.hash_builder, self.default)
    }

    /// Builds a larger registry from `source`, leaving `source` empty.
    ///
    /// This is [`grow`](HybridRegistry::grow) for owners that cannot give up
    /// the source by value. The entries are moved, not cloned: afterwards
    /// `source.len() == 0`, all of its buckets are vacant, and it keeps its
    /// capacity.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut source: HybridRegistry<u64, u64, DefaultHashBuilder> =
    ///     HybridRegistry::with_capacity(3);
    /// source.set(1, 10);
    ///
    /// let grown = HybridRegistry::transfer_from(&mut source);
    /// assert_eq!(grown[&1], 10);
    /// assert!(source.is_empty());
    /// assert_eq!(source[&1], 0);
    /// ```
    pub fn transfer_from(source: &mut Self) -> Self
    where
        V: Default,
        S: Clone,
    {
        let capacity = Capacity::expand(source.capacity());
        let entries = core::mem::replace(
            &mut source.entries,
            Vec::with_capacity(source.buckets.len()),
        );
        source.buckets.fill(VACANT);

        Self::from_entries(
            entries,
            capacity,
            source.hash_builder.clone(),
            core::mem::take(&mut source.default),
        )
    }

    fn from_entries(
        mut entries: Vec<Entry<K, V>>,
        capacity: Capacity,
        hash_builder: S,
        default: V,
    ) -> Self {
        debug_assert!(entries.len() <= capacity.size);

        let mut buckets = vec![VACANT; capacity.size].into_boxed_slice();
        entries.reserve_exact(capacity.size - entries.len());

        for (index, entry) in entries.iter_mut().enumerate() {
            debug_assert!(entry.hash_code <= HASH_CODE_MASK);

            let bucket = entry.hash_code as usize % capacity.size;
            entry.next = buckets[bucket];
            buckets[bucket] = index as u32;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = entries.len(),
            capacity = capacity.size,
            "rebuilt hybrid registry"
        );

        Self {
            buckets,
            entries,
            hash_builder,
            default,
        }
    }

    /// Returns an iterator over the live entries in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut registry: HybridRegistry<&str, u32, DefaultHashBuilder> =
    ///     HybridRegistry::with_capacity(8);
    /// registry.set("b", 2);
    /// registry.set("a", 1);
    ///
    /// let pairs: Vec<_> = registry.iter().collect();
    /// assert_eq!(pairs, [(&"b", &2), (&"a", &1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns the live part of the entry array.
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    /// Returns the head entry index of every bucket, `None` for empty buckets.
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = Option<usize>> + '_ {
        self.buckets
            .iter()
            .map(|&head| (head != VACANT).then_some(head as usize))
    }

    #[inline(always)]
    fn chain_from(&self, head: u32) -> Chain<'_, K, V> {
        Chain {
            entries: &self.entries,
            next: head,
        }
    }
}

impl<K, V, S> HybridRegistry<K, V, S>
where
    K: RegistryKey,
    V: Default,
    S: BuildHasher,
{
    /// Creates an empty registry with the given hasher builder and the
    /// smallest table size.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates an empty registry able to hold at least `capacity` entries.
    ///
    /// The table size is rounded up to a prime by
    /// [`get_prime`](crate::prime::get_prime).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds
    /// [`MAX_PRIME_CAPACITY`](crate::prime::MAX_PRIME_CAPACITY).
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let capacity: Capacity = capacity.into();

        Self {
            buckets: vec![VACANT; capacity.size].into_boxed_slice(),
            entries: Vec::with_capacity(capacity.size),
            hash_builder,
            default: V::default(),
        }
    }
}

impl<K, V, S> HybridRegistry<K, V, S>
where
    K: RegistryKey,
    S: BuildHasher,
{
    #[inline(always)]
    fn bucket_of(&self, hash_code: u32) -> usize {
        hash_code as usize % self.buckets.len()
    }

    #[inline(always)]
    fn find_index(&self, hash_code: u32, bucket: usize, key: &K) -> Option<usize> {
        self.chain_from(self.buckets[bucket])
            .position_of(|entry| entry.hash_code == hash_code && entry.key == *key)
    }

    /// Returns the value stored for `key`, or the registry's default value if
    /// the key was never set.
    ///
    /// This never signals a miss: a key explicitly set to the default value
    /// reads the same as an absent key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut registry: HybridRegistry<Option<&str>, u32, DefaultHashBuilder> =
    ///     HybridRegistry::new();
    /// registry.set(None, 1);
    /// registry.set(Some("named"), 2);
    ///
    /// assert_eq!(*registry.get(&None), 1);
    /// assert_eq!(*registry.get(&Some("named")), 2);
    /// assert_eq!(*registry.get(&Some("other")), 0);
    /// ```
    pub fn get(&self, key: &K) -> &V {
        let hash_code = hash_code(&self.hash_builder, key);
        match self.find_index(hash_code, self.bucket_of(hash_code), key) {
            Some(index) => &self.entries[index].value,
            None => &self.default,
        }
    }

    /// Sets the value for `key`.
    ///
    /// An existing key has its value replaced in place. A new key takes the
    /// next free slot and becomes the head of its bucket's chain.
    ///
    /// # Panics
    ///
    /// Panics if `key` is new and the registry is full. Owners must check
    /// [`needs_growth`](HybridRegistry::needs_growth) and grow first; use
    /// [`try_set`](HybridRegistry::try_set) to get the key and value back
    /// instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut registry: HybridRegistry<u64, &str, DefaultHashBuilder> =
    ///     HybridRegistry::new();
    /// registry.set(7, "first");
    /// registry.set(7, "second");
    ///
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry[&7], "second");
    /// ```
    pub fn set(&mut self, key: K, value: V) {
        if let Err(error) = self.try_set(key, value) {
            panic!("{error}");
        }
    }

    /// Sets the value for `key`, or hands the key and value back if `key` is
    /// new and the registry is full.
    ///
    /// Replacing the value of an existing key always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut registry: HybridRegistry<u64, u64, DefaultHashBuilder> =
    ///     HybridRegistry::new();
    /// for key in 0..3 {
    ///     registry.set(key, key);
    /// }
    ///
    /// let error = registry.try_set(3, 3).unwrap_err();
    /// assert_eq!(error.into_inner(), (3, 3));
    /// assert!(registry.try_set(2, 20).is_ok());
    /// ```
    pub fn try_set(&mut self, key: K, value: V) -> Result<(), CapacityError<K, V>> {
        let hash_code = hash_code(&self.hash_builder, &key);
        let bucket = self.bucket_of(hash_code);

        if let Some(index) = self.find_index(hash_code, bucket, &key) {
            self.entries[index].value = value;
            return Ok(());
        }

        let capacity = self.capacity();
        if self.entries.len() == capacity {
            #[cfg(feature = "tracing")]
            tracing::warn!(capacity, "rejected insert into a full hybrid registry");
            return Err(CapacityError::new(key, value, capacity));
        }

        let index = self.entries.len() as u32;
        self.entries.push(Entry {
            hash_code,
            next: self.buckets[bucket],
            key,
            value,
        });
        self.buckets[bucket] = index;

        Ok(())
    }

    /// Returns an iterator over the chain of the bucket `key` maps to, head
    /// first.
    ///
    /// The chain may hold other keys that share the bucket, and yields nothing
    /// for an empty bucket. Among colliding keys the most recently inserted
    /// comes first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hybrid_registry::DefaultHashBuilder;
    /// # use hybrid_registry::HybridRegistry;
    /// #
    /// let mut registry: HybridRegistry<u64, u64, DefaultHashBuilder> =
    ///     HybridRegistry::new();
    /// registry.set(5, 50);
    ///
    /// let head = registry.chain(&5).next().unwrap();
    /// assert_eq!((*head.key(), *head.value()), (5, 50));
    /// ```
    pub fn chain(&self, key: &K) -> Chain<'_, K, V> {
        let bucket = self.bucket_of(hash_code(&self.hash_builder, key));
        self.chain_from(self.buckets[bucket])
    }
}

impl<K, V, S> HybridRegistry<K, V, S>
where
    K: RegistryKey,
    V: Default,
    S: BuildHasher + Default,
{
    /// Creates an empty registry with the smallest table size and the default
    /// hasher builder.
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty registry able to hold at least `capacity` entries,
    /// using the default hasher builder.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> Default for HybridRegistry<K, V, S>
where
    K: RegistryKey,
    V: Default,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Chain-length statistics for a registry.
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of live entries
    pub populated: usize,
    /// Number of entry slots (and buckets)
    pub capacity: usize,
    /// Number of buckets heading a non-empty chain
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Bucket utilization (occupied_buckets / capacity)
    pub bucket_utilization: f64,
    /// Average number of entries visited by a successful lookup
    pub average_probe: f64,
    /// Total bytes allocated for buckets and entry slots
    pub total_bytes: usize,
}

#[cfg(feature = "stats")]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hybrid Registry Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Buckets: {}/{} ({:.2}% utilization)",
            self.occupied_buckets,
            self.capacity,
            self.bucket_utilization * 100.0
        );
        println!(
            "Chains: longest {}, {:.2} entries per hit",
            self.longest_chain, self.average_probe
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

/// Number of buckets per chain length; index `n` counts chains of length `n`.
#[cfg(feature = "stats")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHistogram {
    bins: Vec<usize>,
}

#[cfg(feature = "stats")]
impl ChainHistogram {
    /// Bucket counts indexed by chain length.
    pub fn bins(&self) -> &[usize] {
        &self.bins
    }

    /// Pretty-prints the histogram as a horizontal bar chart on stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.bins.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!("chain histogram ({} buckets):", self.bins.iter().sum::<usize>());
        for (length, &count) in self.bins.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", length, "█".repeat(width), count);
        }
    }
}

#[cfg(feature = "stats")]
impl<K, V, S> HybridRegistry<K, V, S> {
    fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .map(|&head| self.chain_from(head).count())
    }

    /// Counts buckets by the length of their chain.
    pub fn chain_histogram(&self) -> ChainHistogram {
        let mut bins = vec![0usize; 1];
        for length in self.chain_lengths() {
            if length >= bins.len() {
                bins.resize(length + 1, 0);
            }
            bins[length] += 1;
        }
        ChainHistogram { bins }
    }

    /// Returns chain and utilization statistics for debugging.
    pub fn debug_stats(&self) -> DebugStats {
        let capacity = self.capacity();
        let populated = self.len();

        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        // A hit on the n-th entry of a chain visits n entries.
        let mut probe_total = 0;
        for length in self.chain_lengths() {
            if length > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(length);
            probe_total += length * (length + 1) / 2;
        }

        DebugStats {
            populated,
            capacity,
            occupied_buckets,
            longest_chain,
            load_factor: populated as f64 / capacity as f64,
            bucket_utilization: occupied_buckets as f64 / capacity as f64,
            average_probe: if populated == 0 {
                0.0
            } else {
                probe_total as f64 / populated as f64
            },
            total_bytes: capacity * core::mem::size_of::<u32>()
                + self.entries.capacity() * core::mem::size_of::<Entry<K, V>>(),
        }
    }
}

impl<K, V, S> Index<&K> for HybridRegistry<K, V, S>
where
    K: RegistryKey,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

impl<'a, K, V, S> IntoIterator for &'a HybridRegistry<K, V, S> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of one bucket's chain, head first.
///
/// Created by [`HybridRegistry::chain`].
#[derive(Clone)]
pub struct Chain<'a, K, V> {
    entries: &'a [Entry<K, V>],
    next: u32,
}

impl<'a, K, V> Chain<'a, K, V> {
    fn position_of(mut self, mut found: impl FnMut(&Entry<K, V>) -> bool) -> Option<usize> {
        while self.next != VACANT {
            let index = self.next as usize;
            let entry = &self.entries[index];
            if found(entry) {
                return Some(index);
            }
            self.next = entry.next;
        }
        None
    }
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == VACANT {
            return None;
        }
        let entry = &self.entries[self.next as usize];
        self.next = entry.next;
        Some(entry)
    }
}

/// An iterator over the key-value pairs of a registry in insertion order.
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a registry in insertion order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a registry in insertion order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}
