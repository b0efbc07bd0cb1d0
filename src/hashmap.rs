//! #   The HashMap.
//!
//! The `HashMap` is an associative container using open addressing: all its
//! key-value pairs are stored directly in a single array of slots.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashMap` is a fixed-size array of slots, each of which
//! is either Empty, Live (holding a key-value pair), or a Tombstone (having
//! held a key-value pair, since erased).
//!
//! -   The home slot of a key is its hash modulo the capacity. Collisions are
//!     resolved by linear probing: the following slots are tried in turn,
//!     wrapping around, until the key or an Empty slot is found.
//! -   Erasing a key leaves a Tombstone behind, so that the keys placed further
//!     along the same probe sequence remain reachable. Tombstones are reclaimed
//!     by later insertions, and purged by rehashing.
//! -   Whenever an insertion would bring the load factor to the maximum load
//!     factor, the slots are first rehashed into twice as many slots.
//!
//! The main consequences are:
//!
//! -   The iteration order is the physical order of the slots, unrelated to
//!     the insertion order, and it may change after any modification.
//! -   Erasing never shrinks the capacity; use `rehash` to do so explicitly.
//!
//! #   Example: basic
//!
//! ```
//! use lineprobe::hashmap::HashMap;
//!
//! let mut map: HashMap<_, _> = HashMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//!
//! assert_eq!(2, map.len());
//! assert_eq!(Some(&1), map.get("a"));
//!
//! map.extend([("c", 3), ("d", 4), ("e", 5)]);
//!
//! assert_eq!(5, map.len());
//! assert_eq!(Some(&4), map.get("d"));
//!
//! for (k, v) in &map {
//!     println!("{} => {}", k, v);
//! }
//! ```
//!
//! #   Example: inserting, or not
//!
//! The `HashMap` distinguishes overwriting from inserting:
//!
//! -   `insert` overwrites the value of an existing key, returning the
//!     previous value.
//! -   `insert_if_absent` leaves an existing key untouched, returning whether
//!     it existed.
//! -   `get_or_insert_default` inserts a default value for a missing key, and
//!     returns the value to be modified in place.
//!
//! ```
//! use lineprobe::hashmap::HashMap;
//!
//! let mut map: HashMap<_, _> = HashMap::new();
//!
//! assert_eq!(None, map.insert("x", 10));
//! assert_eq!(Some(10), map.insert("x", 11));
//!
//! assert!(map.insert_if_absent("x", 12));
//! assert_eq!(Some(&11), map.get("x"));
//!
//! *map.get_or_insert_default("y") += 1;
//! *map.get_or_insert_default("y") += 1;
//! assert_eq!(Some(&2), map.get("y"));
//! ```
//!
//! #   Example: erasing
//!
//! ```
//! use lineprobe::hashmap::HashMap;
//!
//! let mut map: HashMap<_, _> = HashMap::new();
//! map.insert("x", 10);
//!
//! assert!(map.erase("x"));
//! assert!(!map.erase("x"));
//! assert_eq!(None, map.get("x"));
//!
//! assert!(!map.insert_if_absent("x", 20));
//! assert_eq!(Some(&20), map.get("x"));
//! ```
//!
//! #   Example: managing capacity
//!
//! `HashMap` provides multiple ways to manage the capacity:
//!
//! -   The `Config` passed to `try_with_config` specifies the initial capacity
//!     and the maximum load factor.
//! -   The `reserve` and `try_reserve` calls allow growing in advance.
//! -   The `rehash` and `try_rehash` calls rebuild the slots at any capacity
//!     large enough for the current elements.
//!
//! ```
//! use lineprobe::failure::{CapacityError, Failure};
//! use lineprobe::hashmap::{Config, HashMap};
//!
//! let config = Config::default().with_initial_capacity(4).with_max_load_factor(0.75);
//! let mut map: HashMap<_, _> = HashMap::try_with_config(config).unwrap();
//!
//! map.insert("a", 1);
//! map.insert("b", 2);
//! assert_eq!(4, map.capacity());
//!
//! //  3 elements in 4 slots would reach the maximum load factor.
//! map.insert("c", 3);
//! assert_eq!(8, map.capacity());
//!
//! assert_eq!(
//!     Err(Failure::Capacity(CapacityError::BelowSize { requested: 2, size: 3 })),
//!     map.try_rehash(2)
//! );
//!
//! map.rehash(3);
//! assert_eq!(3, map.capacity());
//! assert_eq!(Some(&3), map.get("c"));
//! ```
//!
//! #   Example: single-threaded
//!
//! The `HashMap` performs no internal synchronization; like any other value,
//! it can be moved to another thread, or shared immutably across threads,
//! whenever its keys, values, and hooks allow it. Any modification requires
//! exclusive access.
//!
//! ```
//! # use lineprobe::hashmap::HashMap;
//! fn ensure_send<T: Send>(_: T) {}
//!
//! let mut map: HashMap<_, _> = HashMap::new();
//! map.insert("Hello", "World");
//!
//! ensure_send(map);
//! ```
//!
//! ```compile_fail
//! # use std::rc::Rc;
//! # use lineprobe::hashmap::HashMap;
//! fn ensure_send<T: Send>(_: T) {}
//!
//! let mut map: HashMap<_, _> = HashMap::new();
//! map.insert(Rc::new(3), "World");
//!
//! ensure_send(map);
//! ```

pub mod iterator;

mod config;
mod entry;
mod hashmap;

pub use super::hashcore::HashHooks;
pub use super::hashcore::capacity::SlotIndex;
pub use self::config::Config;
pub use self::hashmap::HashMap;

#[cfg(feature = "with-std")]
pub use super::hashcore::DefaultHashHooks;

use super::failure;
use super::hashcore;
use super::root;
