//! The element stored in a slot, viewed through its key.

//  An element which carries its own key.
//
//  The probe engine hashes and compares elements solely by their key.
pub trait Key {
    //  The type of the key.
    type Key;

    //  Returns the key of the element.
    fn key(&self) -> &Self::Key;
}
