//! Internal testing utilities

use crate::root::hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::hashcore::key::Key;

//  Item
//
//  A key-value element, whose key is the first field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item(pub u64, pub i32);

impl Key for Item {
    type Key = u64;

    fn key(&self) -> &u64 { &self.0 }
}

impl<K, V> Key for (K, V) {
    type Key = K;

    fn key(&self) -> &K { &self.0 }
}

//  Modulo Hooks
//
//  Hooks hashing integers to themselves, so that the home slot of an integer
//  key is the key modulo the capacity; ideal to provoke collisions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModuloHooks;

impl hash::BuildHasher for ModuloHooks {
    type Hasher = ModuloHasher;

    fn build_hasher(&self) -> ModuloHasher { ModuloHasher(0) }
}

//  The Hasher of ModuloHooks.
//
//  Integers are hashed to themselves, other bytes are folded.
pub struct ModuloHasher(u64);

impl hash::Hasher for ModuloHasher {
    fn finish(&self) -> u64 { self.0 }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = self.0.wrapping_mul(31).wrapping_add(u64::from(byte));
        }
    }

    fn write_u8(&mut self, i: u8) { self.0 = u64::from(i) }

    fn write_u16(&mut self, i: u16) { self.0 = u64::from(i) }

    fn write_u32(&mut self, i: u32) { self.0 = u64::from(i) }

    fn write_u64(&mut self, i: u64) { self.0 = i }

    fn write_usize(&mut self, i: usize) { self.0 = i as u64 }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Clone for SpyElement<'a> {
    fn clone(&self) -> Self { SpyElement::new(self.count) }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

//  A deterministic pseudo-random generator, xorshift64*.
pub struct XorShift(u64);

impl XorShift {
    //  Creates an instance; a 0 seed is bumped, as it would be a fixed point.
    pub fn new(seed: u64) -> Self { Self(seed.max(1)) }

    pub fn next(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    //  Returns a number within [0, bound).
    pub fn below(&mut self, bound: u64) -> u64 { self.next() % bound }
}

//  A value which may panic on drop.
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct PanickyDrop<T>(pub T, bool);

impl<T> PanickyDrop<T> {
    //  Creates a normal instance.
    pub fn new(value: T) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: T) -> Self { Self(value, true) }
}

impl<T> Drop for PanickyDrop<T> {
    fn drop(&mut self) { if self.1 { panic!("Oh No!") } }
}

#[cfg(test)]
mod tests {

use std::hash::BuildHasher;

use super::*;

#[test]
fn modulo_hooks_integers() {
    assert_eq!(42, ModuloHooks.hash_one(42u64));
    assert_eq!(42, ModuloHooks.hash_one(42usize));
    assert_eq!(42, ModuloHooks.hash_one(42i32));
    assert_eq!(7, ModuloHooks.hash_one(&7u8));
}

#[test]
fn xorshift_deterministic() {
    let mut first = XorShift::new(42);
    let mut second = XorShift::new(42);

    for _ in 0..100 {
        assert_eq!(first.next(), second.next());
    }

    let mut zero = XorShift::new(0);
    assert_ne!(0, zero.next());
    assert!((0..100).all(|_| zero.below(7) < 7));
}

#[test]
fn spy_count() {
    let count = SpyCount::zero();

    let first = SpyElement::new(&count);
    let second = first.clone();
    assert_eq!(2, count.get());

    drop(first);
    drop(second);
    assert_eq!(0, count.get());
}

}
