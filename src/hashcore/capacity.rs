//! The HashMap capacity, and load factor.

use super::failure::{CapacityError, Result};
use super::root::cmp;

/// The default number of slots of a new HashMap.
pub const DEFAULT_CAPACITY: usize = 16;

/// The default maximum load factor of a new HashMap.
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 0.75;

/// The index of a slot.
///
/// A `SlotIndex` designates a position in the slot array, not an element: it
/// is invalidated by any rehash, and by the erasure of the element it points
/// to.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct SlotIndex(pub usize);

//  The number of live elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(pub usize);

//  The number of slots; never 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Capacity(usize);

impl Capacity {
    //  Creates an instance.
    //
    //  #   Errors
    //
    //  Returns an error if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CapacityError::Zero.into());
        }

        Ok(Self(capacity))
    }

    //  Creates an instance, rounding 0 up to 1.
    pub fn at_least_one(capacity: usize) -> Self { Self(cmp::max(capacity, 1)) }

    //  Returns the number of slots.
    pub fn get(self) -> usize { self.0 }

    //  Returns the home slot of a hash.
    pub fn home(self, hash: usize) -> SlotIndex { SlotIndex(hash % self.0) }

    //  Returns twice the capacity.
    //
    //  #   Errors
    //
    //  Returns an error if the result overflows.
    pub fn doubled(self) -> Result<Self> {
        self.0.checked_mul(2)
            .map(Self)
            .ok_or_else(|| CapacityError::Overflow.into())
    }
}

//  The maximum load factor, within (0, 1].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct MaxLoadFactor(f32);

impl MaxLoadFactor {
    //  Creates an instance.
    //
    //  #   Errors
    //
    //  Returns an error if `factor` is not within (0, 1], NaN included.
    pub fn new(factor: f32) -> Result<Self> {
        if factor > 0.0 && factor <= 1.0 {
            Ok(Self(factor))
        } else {
            Err(CapacityError::InvalidLoadFactor(factor).into())
        }
    }

    //  Returns the factor.
    pub fn get(self) -> f32 { self.0 }

    //  Returns whether `size` elements fit within `capacity` slots.
    //
    //  The load must remain strictly below the factor, which guarantees that
    //  at least one slot is never live.
    pub fn admits(self, size: Size, capacity: Capacity) -> bool {
        (size.0 as f64) < f64::from(self.0) * (capacity.0 as f64)
    }

    //  Returns the smallest capacity, obtained by doubling `capacity`, which
    //  admits `size` elements.
    //
    //  #   Errors
    //
    //  Returns an error if the capacity overflows.
    pub fn grown(self, size: Size, capacity: Capacity) -> Result<Capacity> {
        let mut capacity = capacity;

        while !self.admits(size, capacity) {
            capacity = capacity.doubled()?;
        }

        Ok(capacity)
    }
}

impl Default for MaxLoadFactor {
    fn default() -> Self { Self(DEFAULT_MAX_LOAD_FACTOR) }
}
