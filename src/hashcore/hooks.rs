//! Hooks of the HashMap.

#[cfg(feature = "with-std")]
use std::collections::hash_map;

use super::root::hash;

/// HashHooks
///
/// The hashing algorithm of a HashMap: the home slot of a key is its hash,
/// modulo the capacity of the HashMap.
///
/// Any `BuildHasher` qualifies. Hashing is not expected to be cryptographic,
/// however a poorly distributed hash leads to long probe sequences.
///
/// Also see DefaultHashHooks for the default, when the `with-std` feature is used.
pub trait HashHooks: hash::BuildHasher {}

impl<B: hash::BuildHasher> HashHooks for B {}

/// DefaultHashHooks
///
/// Default hooks for the HashMap:
/// -   deferring hashing to a randomly seeded `RandomState`.
#[cfg(feature = "with-std")]
#[derive(Clone, Debug, Default)]
pub struct DefaultHashHooks(hash_map::RandomState);

#[cfg(feature = "with-std")]
impl hash::BuildHasher for DefaultHashHooks {
    type Hasher = hash_map::DefaultHasher;

    fn build_hasher(&self) -> Self::Hasher {
        self.0.build_hasher()
    }
}
