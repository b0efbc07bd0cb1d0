//! The iterators over the slots of the HashMap.
//!
//! Iteration visits the Live slots in physical order, skipping over Empty and
//! Tombstone slots. Each iterator borrows, or owns, the slots it walks over;
//! hence the borrow checker forbids modifying the map while it is iterated.

use super::root::{fmt, iter, mem, vec};

use super::slot::Slot;
use super::slots::SlotArray;

impl<T> SlotArray<T>
where
    T: fmt::Debug
{
    //  Formats the Debug representation of the slots.
    pub fn debug(&self, name: &str, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {{ capacity: {}, length: {}, slots: [",
            name, self.capacity().get(), self.size().0)?;

        for (index, slot) in self.slots().iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }

            match slot {
                Slot::Empty => write!(f, "<empty>")?,
                Slot::Live(e) => write!(f, "{:?}", e)?,
                Slot::Tombstone => write!(f, "<tombstone>")?,
            }
        }

        write!(f, "] }}")
    }
}

/// ElementIterator
///
/// An iterator over the elements of a SlotArray.
pub struct ElementIterator<'a, T> {
    //  The slots not yet visited; the cursor is its start.
    slots: &'a [Slot<T>],
    //  The number of Live slots not yet visited.
    remaining: usize,
}

impl<'a, T> ElementIterator<'a, T> {
    //  Creates an instance of ElementIterator.
    pub fn create(array: &'a SlotArray<T>) -> Self {
        ElementIterator { slots: array.slots(), remaining: array.size().0 }
    }
}

impl<'a, T> Clone for ElementIterator<'a, T> {
    fn clone(&self) -> Self {
        ElementIterator { slots: self.slots, remaining: self.remaining }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for ElementIterator<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> iter::Iterator for ElementIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some((head, tail)) = self.slots.split_first() {
            self.slots = tail;

            if let Some(element) = head.live() {
                self.remaining -= 1;
                return Some(element);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> iter::ExactSizeIterator for ElementIterator<'a, T> {}

impl<'a, T> iter::FusedIterator for ElementIterator<'a, T> {}

/// ElementIteratorMut
///
/// An iterator over the elements of a SlotArray, granting mutable access.
pub struct ElementIteratorMut<'a, T> {
    slots: &'a mut [Slot<T>],
    remaining: usize,
}

impl<'a, T> ElementIteratorMut<'a, T> {
    //  Creates an instance of ElementIteratorMut.
    pub fn create(array: &'a mut SlotArray<T>) -> Self {
        let remaining = array.size().0;
        ElementIteratorMut { slots: array.slots_mut(), remaining }
    }
}

impl<'a, T> iter::Iterator for ElementIteratorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            let slots = mem::take(&mut self.slots);
            let (head, tail) = slots.split_first_mut()?;
            self.slots = tail;

            if let Some(element) = head.live_mut() {
                self.remaining -= 1;
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> iter::ExactSizeIterator for ElementIteratorMut<'a, T> {}

impl<'a, T> iter::FusedIterator for ElementIteratorMut<'a, T> {}

/// ElementIntoIterator
///
/// An iterator over the elements of a SlotArray, taking ownership.
pub struct ElementIntoIterator<T> {
    slots: vec::IntoIter<Slot<T>>,
    remaining: usize,
}

impl<T> ElementIntoIterator<T> {
    //  Creates an instance of ElementIntoIterator.
    pub fn create(array: SlotArray<T>) -> Self {
        let remaining = array.size().0;
        ElementIntoIterator { slots: array.into_slots().into_iter(), remaining }
    }
}

impl<T> iter::Iterator for ElementIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let element = self.slots.by_ref().find_map(Slot::into_live)?;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> iter::ExactSizeIterator for ElementIntoIterator<T> {}

impl<T> iter::FusedIterator for ElementIntoIterator<T> {}
