//! Re-export alloc/core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{
    borrow, cmp, fmt, hash, iter, mem, ops, result,
};

#[cfg(feature = "with-std")]
pub use std::{
    borrow, cmp, fmt, hash, iter, mem, ops, result,
};

pub use alloc::vec;
