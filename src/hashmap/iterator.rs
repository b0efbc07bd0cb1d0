//! Various iterators over the HashMap.
//!
//! All iterators visit the elements in the physical order of their slots,
//! which is unrelated to the order of insertion, and may change whenever the
//! `HashMap` is modified.

use super::root::{fmt, iter};

use super::entry::Entry;
use super::hashcore::slots_api::{ElementIntoIterator, ElementIterator, ElementIteratorMut};

/// An iterator over the keys of a `HashMap`.
pub struct KeyIterator<'a, K, V>(ElementIterator<'a, Entry<K, V>>);

impl<'a, K, V> KeyIterator<'a, K, V> {
    pub(crate) fn create(iterator: ElementIterator<'a, Entry<K, V>>) -> Self {
        Self(iterator)
    }
}

impl<'a, K, V> Clone for KeyIterator<'a, K, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, K, V> iter::Iterator for KeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|e| &e.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> iter::ExactSizeIterator for KeyIterator<'a, K, V> {}

impl<'a, K, V> iter::FusedIterator for KeyIterator<'a, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct ValueIterator<'a, K, V>(ElementIterator<'a, Entry<K, V>>);

impl<'a, K, V> ValueIterator<'a, K, V> {
    pub(crate) fn create(iterator: ElementIterator<'a, Entry<K, V>>) -> Self {
        Self(iterator)
    }
}

impl<'a, K, V> Clone for ValueIterator<'a, K, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, K, V> iter::Iterator for ValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|e| &e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> iter::ExactSizeIterator for ValueIterator<'a, K, V> {}

impl<'a, K, V> iter::FusedIterator for ValueIterator<'a, K, V> {}

/// An iterator over the values of a `HashMap`, granting mutable access.
pub struct ValueIteratorMut<'a, K, V>(ElementIteratorMut<'a, Entry<K, V>>);

impl<'a, K, V> ValueIteratorMut<'a, K, V> {
    pub(crate) fn create(iterator: ElementIteratorMut<'a, Entry<K, V>>) -> Self {
        Self(iterator)
    }
}

impl<'a, K, V> iter::Iterator for ValueIteratorMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.0.next().map(|e| &mut e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> iter::ExactSizeIterator for ValueIteratorMut<'a, K, V> {}

impl<'a, K, V> iter::FusedIterator for ValueIteratorMut<'a, K, V> {}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct KeyValueIterator<'a, K, V>(ElementIterator<'a, Entry<K, V>>);

impl<'a, K, V> KeyValueIterator<'a, K, V> {
    pub(crate) fn create(iterator: ElementIterator<'a, Entry<K, V>>) -> Self {
        Self(iterator)
    }
}

impl<'a, K, V> Clone for KeyValueIterator<'a, K, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeyValueIterator<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.clone()).finish()
    }
}

impl<'a, K, V> iter::Iterator for KeyValueIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> iter::ExactSizeIterator for KeyValueIterator<'a, K, V> {}

impl<'a, K, V> iter::FusedIterator for KeyValueIterator<'a, K, V> {}

/// An iterator over the key-value pairs of a `HashMap`, granting mutable
/// access to the values.
pub struct KeyValueIteratorMut<'a, K, V>(ElementIteratorMut<'a, Entry<K, V>>);

impl<'a, K, V> KeyValueIteratorMut<'a, K, V> {
    pub(crate) fn create(iterator: ElementIteratorMut<'a, Entry<K, V>>) -> Self {
        Self(iterator)
    }
}

impl<'a, K, V> iter::Iterator for KeyValueIteratorMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| (&e.key, &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> iter::ExactSizeIterator for KeyValueIteratorMut<'a, K, V> {}

impl<'a, K, V> iter::FusedIterator for KeyValueIteratorMut<'a, K, V> {}

/// An owning iterator over the key-value pairs of a `HashMap`.
pub struct KeyValueIntoIterator<K, V>(ElementIntoIterator<Entry<K, V>>);

impl<K, V> KeyValueIntoIterator<K, V> {
    pub(crate) fn create(iterator: ElementIntoIterator<Entry<K, V>>) -> Self {
        Self(iterator)
    }
}

impl<K, V> iter::Iterator for KeyValueIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.0.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> iter::ExactSizeIterator for KeyValueIntoIterator<K, V> {}

impl<K, V> iter::FusedIterator for KeyValueIntoIterator<K, V> {}
