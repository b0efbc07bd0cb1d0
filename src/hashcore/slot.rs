//! Internal slot.

use super::root::mem;

//  The state of a slot, and its element if any.
//
//  A Tombstone is left behind by erasure: it never matches a key, yet it does
//  not terminate a probe sequence either.
#[derive(Clone, Debug)]
pub enum Slot<T> {
    //  Never used since creation, clearing, or rehashing.
    Empty,
    //  Holds an element.
    Live(T),
    //  Held an element, which was erased.
    Tombstone,
}

impl<T> Slot<T> {
    //  Checks whether the slot holds an element.
    pub fn is_live(&self) -> bool { matches!(self, Slot::Live(_)) }

    //  Checks whether the slot is a tombstone.
    pub fn is_tombstone(&self) -> bool { matches!(self, Slot::Tombstone) }

    //  Gets the element, if any.
    pub fn live(&self) -> Option<&T> {
        match self {
            Slot::Live(element) => Some(element),
            _ => None,
        }
    }

    //  Gets the element, if any.
    pub fn live_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Live(element) => Some(element),
            _ => None,
        }
    }

    //  Stores the element, returning a reference to it.
    //
    //  The previous state is discarded, and should not be Live.
    pub fn fill(&mut self, element: T) -> &mut T {
        debug_assert!(!self.is_live());

        *self = Slot::Live(element);

        match self {
            Slot::Live(element) => element,
            _ => unreachable!("a slot just filled is live"),
        }
    }

    //  Takes the element, if any, leaving a Tombstone behind.
    pub fn bury(&mut self) -> Option<T> {
        if !self.is_live() {
            return None;
        }

        match mem::replace(self, Slot::Tombstone) {
            Slot::Live(element) => Some(element),
            _ => None,
        }
    }

    //  Converts into the element, if any.
    pub fn into_live(self) -> Option<T> {
        match self {
            Slot::Live(element) => Some(element),
            _ => None,
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self { Slot::Empty }
}
