//! Internal definition of the HashMap slot array and probe engine.

pub mod capacity;
pub mod key;
pub mod slots;
pub mod slots_api;

mod hooks;
mod slot;

pub use self::hooks::HashHooks;

#[cfg(feature = "with-std")]
pub use self::hooks::DefaultHashHooks;

use super::failure;
use super::root;
