#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// The separately chained registry.
///
/// This module provides `HybridRegistry`, its entry array view and the
/// iterators over it.
pub mod hybrid_registry;

/// Key hashing for registry keys, including the null key.
pub mod key;

pub mod prime;

mod error;

pub use error::CapacityError;
pub use hybrid_registry::HybridRegistry;
pub use key::RegistryKey;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = std::hash::RandomState;
    }
}
