//! The Failure and Result types of this library.
//!
//! Lookups never fail: absence is expressed as `None` or `false`. Only misuse
//! of capacity or configuration, checked lookups, and broken internal
//! invariants are represented as a `Failure`.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.

use super::root::result;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Failure {
    /// The key looked up by a checked access is not present.
    #[error("key not found")]
    KeyNotFound,
    /// The requested capacity or configuration is invalid.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    /// The probe sequence visited every slot without finding a vacancy.
    ///
    /// This signals a broken load factor invariant, and should never occur.
    #[error("table overflow: all {capacity} slots probed without vacancy")]
    TableOverflow {
        /// The capacity of the table at the time.
        capacity: usize,
    },
}

/// Misuse of capacity or configuration.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CapacityError {
    /// The requested capacity cannot hold the current elements.
    #[error("capacity {requested} cannot hold {size} elements")]
    BelowSize {
        /// The requested capacity.
        requested: usize,
        /// The number of elements in the table.
        size: usize,
    },
    /// A capacity of 0 was requested.
    #[error("capacity must be at least 1")]
    Zero,
    /// The maximum load factor is not within `(0, 1]`.
    #[error("max load factor {0} is not within (0, 1]")]
    InvalidLoadFactor(f32),
    /// The number of slots cannot be calculated due to overflowing.
    #[error("capacity overflows usize")]
    Overflow,
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!("key not found", format!("{}", Failure::KeyNotFound));
        assert_eq!(
            "table overflow: all 8 slots probed without vacancy",
            format!("{}", Failure::TableOverflow { capacity: 8 })
        );
    }

    #[test]
    fn capacity_display() {
        let failure = Failure::from(CapacityError::BelowSize { requested: 2, size: 3 });

        assert_eq!("capacity 2 cannot hold 3 elements", format!("{}", failure));
        assert_eq!(
            "max load factor 1.5 is not within (0, 1]",
            format!("{}", CapacityError::InvalidLoadFactor(1.5))
        );
    }

    #[test]
    fn capacity_from() {
        let failure: Failure = CapacityError::Zero.into();

        assert_eq!(Failure::Capacity(CapacityError::Zero), failure);
    }
}
