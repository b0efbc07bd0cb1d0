//! The slot array underlying the HashMap, and its probe engine.
//!
//! Every key has a home slot, its hash modulo the capacity. Its probe sequence
//! walks linearly from the home slot, wrapping around, and ends at the first
//! Empty slot. Tombstones neither match nor end a probe sequence, which keeps
//! the chains of other keys connected after an erasure.

use super::root::{borrow, hash, mem, vec};

use super::capacity::{Capacity, MaxLoadFactor, Size, SlotIndex};
use super::failure::{CapacityError, Failure, Result};
use super::key::Key;
use super::slot::Slot;

use self::borrow::Borrow;
use self::vec::Vec;

//  The storage.
#[derive(Clone)]
pub struct SlotArray<T> {
    slots: Vec<Slot<T>>,
    //  The number of Live slots.
    size: Size,
    //  The number of Tombstone slots.
    tombstones: usize,
}

impl<T> SlotArray<T> {
    //  Creates an instance with `capacity` Empty slots.
    pub fn new(capacity: Capacity) -> Self {
        Self { slots: Self::empty_slots(capacity), size: Size(0), tombstones: 0 }
    }

    //  Returns the number of slots.
    pub fn capacity(&self) -> Capacity {
        //  Never empty, as constructed from a Capacity.
        Capacity::at_least_one(self.slots.len())
    }

    //  Returns the number of Live slots.
    pub fn size(&self) -> Size { self.size }

    //  Returns the number of Tombstone slots.
    pub fn tombstones(&self) -> usize { self.tombstones }

    //  Returns the slots, in physical order.
    pub fn slots(&self) -> &[Slot<T>] { &self.slots }

    //  Returns the slots, in physical order.
    //
    //  The state of the slots must not be altered, only their elements.
    pub fn slots_mut(&mut self) -> &mut [Slot<T>] { &mut self.slots }

    //  Returns the slots, in physical order.
    pub fn into_slots(self) -> Vec<Slot<T>> { self.slots }

    //  Gets the element at `index`, if Live.
    pub fn get_at(&self, index: SlotIndex) -> Option<&T> {
        self.slots.get(index.0).and_then(Slot::live)
    }

    //  Gets the element at `index`, if Live.
    pub fn get_at_mut(&mut self, index: SlotIndex) -> Option<&mut T> {
        self.slots.get_mut(index.0).and_then(Slot::live_mut)
    }

    //  Erases the element at `index`, if Live, leaving a Tombstone behind.
    pub fn erase_at(&mut self, index: SlotIndex) -> Option<T> {
        let element = self.slots.get_mut(index.0).and_then(Slot::bury)?;

        self.size.0 -= 1;
        self.tombstones += 1;

        Some(element)
    }

    //  Erases all elements for which `predicate` returns false.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        for index in 0..self.slots.len() {
            let keep = match self.slots[index].live_mut() {
                Some(element) => predicate(element),
                None => true,
            };

            if !keep {
                self.erase_at(SlotIndex(index));
            }
        }
    }

    //  Clears the slots, dropping all elements.
    //
    //  The capacity is unchanged, and all slots are Empty afterwards.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            let slot = mem::take(slot);

            //  Accounted before dropping, in case a Drop panics.
            if slot.is_live() {
                self.size.0 -= 1;
            } else if slot.is_tombstone() {
                self.tombstones -= 1;
            }

            drop(slot);
        }

        debug_assert_eq!(Size(0), self.size);
        debug_assert_eq!(0, self.tombstones);
    }

    fn empty_slots(capacity: Capacity) -> Vec<Slot<T>> {
        let mut slots = Vec::with_capacity(capacity.get());
        slots.resize_with(capacity.get(), Slot::default);
        slots
    }
}

impl<T: Key> SlotArray<T> {
    //  Finds the slot of the element whose key matches.
    pub fn find<Q, H>(&self, key: &Q, hook: &H) -> Option<SlotIndex>
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        match self.probe(key, Self::hash(key, hook)) {
            Probe::Occupied(index) => Some(index),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    //  Gets the element whose key matches.
    pub fn get<Q, H>(&self, key: &Q, hook: &H) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        let index = self.find(key, hook)?;
        self.get_at(index)
    }

    //  Gets the element whose key matches.
    //
    //  Warning: modifying the part of the element that determines its key may
    //  result in corrupting the invariants of the map. Not unsafe, but unwise.
    pub fn get_mut<Q, H>(&mut self, key: &Q, hook: &H) -> Option<&mut T>
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        let index = self.find(key, hook)?;
        self.get_at_mut(index)
    }

    //  Erases the element whose key matches, leaving a Tombstone behind.
    pub fn erase<Q, H>(&mut self, key: &Q, hook: &H) -> Option<T>
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        let index = self.find(key, hook)?;
        self.erase_at(index)
    }

    //  Looks up the element whose key matches, or the slot where it should be
    //  inserted.
    //
    //  If the elements, counting the key if absent, are not admitted by
    //  `factor`, the array is first rehashed into a larger capacity.
    //
    //  #   Errors
    //
    //  Returns an error if the capacity overflows, or if no vacant slot can be
    //  found.
    pub fn try_locate<Q, H>(
        &mut self,
        key: &Q,
        factor: MaxLoadFactor,
        hook: &H,
    )
        -> Result<Location<'_, T>>
    where
        T::Key: Borrow<Q> + hash::Hash,
        Q: ?Sized + Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        let hash = Self::hash(key, hook);

        let mut probe = self.probe(key, hash);

        //  An explicit rehash may have left the array above its load factor.
        let needed = match probe {
            Probe::Occupied(_) => self.size,
            Probe::Vacant(_) | Probe::Exhausted => Size(self.size.0 + 1),
        };

        if !factor.admits(needed, self.capacity()) {
            let capacity = factor.grown(needed, self.capacity())?;
            self.rehash(capacity, hook);

            probe = self.probe(key, hash);
        }

        match probe {
            Probe::Vacant(index) => Ok(Location::Vacant(Vacancy { array: self, index })),
            Probe::Occupied(index) => Ok(self.occupied(index)),
            Probe::Exhausted => {
                let capacity = self.slots.len();
                tracing::error!(capacity, size = self.size.0, "probe sequence exhausted");
                Err(Failure::TableOverflow { capacity })
            },
        }
    }

    //  Reserves space for `extra` more elements, such that inserting them does
    //  not require rehashing.
    //
    //  #   Errors
    //
    //  Returns an error if the capacity overflows.
    pub fn try_reserve<H>(&mut self, extra: usize, factor: MaxLoadFactor, hook: &H)
        -> Result<()>
    where
        T::Key: Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        let total = self.size.0.checked_add(extra).ok_or(CapacityError::Overflow)?;

        self.try_fit(Size(total), factor, hook)
    }

    //  Grows, if necessary, such that `size` elements are admitted by `factor`.
    //
    //  #   Errors
    //
    //  Returns an error if the capacity overflows.
    pub fn try_fit<H>(&mut self, size: Size, factor: MaxLoadFactor, hook: &H)
        -> Result<()>
    where
        T::Key: Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        if factor.admits(size, self.capacity()) {
            return Ok(());
        }

        let capacity = factor.grown(size, self.capacity())?;
        self.rehash(capacity, hook);

        Ok(())
    }

    //  Rehashes all elements into `capacity` slots.
    //
    //  #   Errors
    //
    //  Returns an error if `capacity` is 0, or cannot hold all elements.
    pub fn try_rehash<H>(&mut self, capacity: usize, hook: &H) -> Result<()>
    where
        T::Key: Eq + hash::Hash,
        H: hash::BuildHasher,
    {
        if capacity < self.size.0 {
            return Err(CapacityError::BelowSize { requested: capacity, size: self.size.0 }.into());
        }

        let capacity = Capacity::new(capacity)?;
        self.rehash(capacity, hook);

        Ok(())
    }

    //  Rehashes all elements into `capacity` slots.
    //
    //  Tombstones are not carried over.
    fn rehash<H>(&mut self, capacity: Capacity, hook: &H)
    where
        T::Key: hash::Hash,
        H: hash::BuildHasher,
    {
        debug_assert!(capacity.get() >= self.size.0);

        tracing::debug!(
            from = self.slots.len(),
            to = capacity.get(),
            size = self.size.0,
            tombstones = self.tombstones,
            "rehashing"
        );

        let size = self.size;
        let old = mem::replace(&mut self.slots, Self::empty_slots(capacity));

        self.size = Size(0);
        self.tombstones = 0;

        for element in old.into_iter().filter_map(Slot::into_live) {
            let hash = Self::hash(element.key(), hook);
            self.place(element, hash);
        }

        debug_assert_eq!(size, self.size);
    }

    //  Places an element whose key is known to be absent, in the first
    //  non-Live slot of its probe sequence.
    fn place(&mut self, element: T, hash: Hash) {
        let capacity = self.capacity();
        let home = capacity.home(hash.0);

        let (head, tail) = self.slots.split_at_mut(home.0);

        let slot = tail.iter_mut().chain(head.iter_mut()).find(|slot| !slot.is_live());

        match slot {
            Some(slot) => {
                if slot.is_tombstone() {
                    self.tombstones -= 1;
                }
                slot.fill(element);
                self.size.0 += 1;
            },
            None => panic_no_vacancy(capacity.get()),
        }
    }

    //  Walks the probe sequence of `key`.
    //
    //  The first Tombstone encountered is remembered, so that an absent key is
    //  inserted there rather than further along.
    fn probe<Q>(&self, key: &Q, hash: Hash) -> Probe
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let capacity = self.capacity();
        let home = capacity.home(hash.0);

        let (head, tail) = self.slots.split_at(home.0);

        let mut first_tombstone = None;

        for (offset, slot) in tail.iter().chain(head).enumerate() {
            let index = SlotIndex((home.0 + offset) % capacity.get());

            match slot {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(index)),
                Slot::Tombstone => {
                    first_tombstone = first_tombstone.or(Some(index));
                },
                Slot::Live(candidate) => {
                    if candidate.key().borrow() == key {
                        return Probe::Occupied(index);
                    }
                },
            }
        }

        //  Every slot is either Live or a Tombstone.
        match first_tombstone {
            Some(index) => Probe::Vacant(index),
            None => Probe::Exhausted,
        }
    }

    fn occupied(&mut self, index: SlotIndex) -> Location<'_, T> {
        match self.slots[index.0].live_mut() {
            Some(element) => Location::Occupied(element),
            None => unreachable!("probe reported a non-live slot as occupied"),
        }
    }

    fn hash<Q, H>(key: &Q, hook: &H) -> Hash
    where
        Q: ?Sized + hash::Hash,
        H: hash::BuildHasher,
    {
        Hash(hook.hash_one(key) as usize)
    }
}

//  The result of looking up a key, or where to insert it.
pub enum Location<'a, T> {
    //  The element was located.
    Occupied(&'a mut T),
    //  The element can be inserted here.
    Vacant(Vacancy<'a, T>),
}

//  A slot, Empty or Tombstone, ready to receive an element.
pub struct Vacancy<'a, T> {
    array: &'a mut SlotArray<T>,
    index: SlotIndex,
}

impl<'a, T> Vacancy<'a, T> {
    //  Stores the element in the slot.
    pub fn fill(self, element: T) -> &'a mut T {
        let array = self.array;
        let slot = &mut array.slots[self.index.0];

        if slot.is_tombstone() {
            tracing::trace!(index = self.index.0, "reclaiming tombstone");
            array.tombstones -= 1;
        }

        array.size.0 += 1;

        slot.fill(element)
    }
}

//
//  Implementation Details
//

//  The hash of an element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Hash(pub usize);

//  The outcome of a probe sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Probe {
    //  The key was found.
    Occupied(SlotIndex),
    //  The key is absent, and could be inserted here.
    Vacant(SlotIndex),
    //  The key is absent, and every slot is Live.
    Exhausted,
}

#[cold]
#[inline(never)]
fn panic_no_vacancy(capacity: usize) -> ! {
    panic!("{}", Failure::TableOverflow { capacity });
}
