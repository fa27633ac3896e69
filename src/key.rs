use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::any::TypeId;
use core::hash::BuildHasher;
use core::hash::Hash;

/// A key that can be stored in a [`HybridRegistry`](crate::HybridRegistry).
///
/// Keys supply their own hash function and compare with their own `Eq`
/// implementation. The registry only clears the sign bit of the 32-bit hash
/// code and reduces it modulo the table size.
///
/// Returning `None` from [`hash_key`](RegistryKey::hash_key) marks the *null
/// key*: it always hashes to `0` and is equal only to another null key. The
/// provided implementation for `Option<T>` maps `None` to the null key, which
/// is how an unnamed registration sits next to named ones.
///
/// # Examples
///
/// ```rust
/// use core::hash::BuildHasher;
///
/// use hybrid_registry::RegistryKey;
/// use hybrid_registry::key::hash_of;
///
/// #[derive(PartialEq, Eq)]
/// struct ServiceId {
///     name: &'static str,
///     version: u32,
/// }
///
/// impl RegistryKey for ServiceId {
///     fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64> {
///         Some(hash_of(&(self.name, self.version), hash_builder))
///     }
/// }
/// ```
pub trait RegistryKey: Eq {
    /// Hashes this key with `hash_builder`, or returns `None` for the null
    /// key.
    fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64>;
}

/// Hashes any `Hash` value with the given hasher builder.
///
/// Convenience for implementing [`RegistryKey`] on types that already derive
/// `Hash`.
#[inline]
pub fn hash_of<T, S>(value: &T, hash_builder: &S) -> u64
where
    T: Hash + ?Sized,
    S: BuildHasher,
{
    hash_builder.hash_one(value)
}

macro_rules! impl_registry_key_via_hash {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RegistryKey for $ty {
                #[inline]
                fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64> {
                    Some(hash_of(self, hash_builder))
                }
            }
        )*
    };
}

impl_registry_key_via_hash!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), str, String,
    Box<str>, TypeId,
);

impl RegistryKey for Cow<'_, str> {
    #[inline]
    fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64> {
        Some(hash_of(self, hash_builder))
    }
}

impl<T> RegistryKey for &T
where
    T: RegistryKey + ?Sized,
{
    #[inline]
    fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64> {
        (**self).hash_key(hash_builder)
    }
}

impl<T> RegistryKey for Option<T>
where
    T: RegistryKey,
{
    #[inline]
    fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64> {
        self.as_ref().and_then(|key| key.hash_key(hash_builder))
    }
}

// Tuples are never null, even when a component is. `(TypeId, None)` is a
// perfectly ordinary key: the default registration for a type.
impl<A, B> RegistryKey for (A, B)
where
    A: RegistryKey,
    B: RegistryKey,
{
    #[inline]
    fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64> {
        let parts = (self.0.hash_key(hash_builder), self.1.hash_key(hash_builder));
        Some(hash_of(&parts, hash_builder))
    }
}

impl<A, B, C> RegistryKey for (A, B, C)
where
    A: RegistryKey,
    B: RegistryKey,
    C: RegistryKey,
{
    #[inline]
    fn hash_key<S: BuildHasher>(&self, hash_builder: &S) -> Option<u64> {
        let parts = (
            self.0.hash_key(hash_builder),
            self.1.hash_key(hash_builder),
            self.2.hash_key(hash_builder),
        );
        Some(hash_of(&parts, hash_builder))
    }
}
