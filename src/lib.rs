#![cfg_attr(not(any(test, feature = "with-std")), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The LineProbe Library
//!
//! An associative container using open addressing.
//! -   The `HashMap`: a single-threaded `HashMap`, storing its entries in a
//!     single contiguous array of slots.
//!
//! Collisions are resolved by linear probing, erasure leaves tombstones behind
//! so that probe chains stay connected, and the slot array is rebuilt at twice
//! its capacity whenever the load factor threshold would be crossed.

extern crate alloc;

pub mod failure;
pub mod hashmap;

mod hashcore;
mod utils;

use self::utils::root;
