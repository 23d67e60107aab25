//! The capability shared by the elements of every collection in this crate.

use std::cell::Ref;

/// A handle to a single element of a linked collection.
///
/// Handles are cheap to clone and compare by identity: two handles are equal only if they refer to
/// the same element, regardless of the values held.
pub trait Element: Sized + Clone + PartialEq {
    /// The type of value stored by the element.
    type Value;

    /// Borrows the value stored by this element. The borrow only blocks replacing the value, never
    /// relinking the element.
    fn value(&self) -> Ref<'_, Self::Value>;

    /// Returns the element following this one, if there is one.
    fn next(&self) -> Option<Self>;

    /// Returns the element preceding this one, if there is one.
    fn prev(&self) -> Option<Self>;
}

#[cfg(all(test, feature = "linked", feature = "circ"))]
mod tests {
    use super::Element;
    use crate::collections::circ::CircularList;
    use crate::collections::linked::DoublyLinkedList;

    /// Follows `next` from `start` for at most `limit` elements.
    fn forward<E: Element>(start: Option<E>, limit: usize) -> Vec<E::Value>
    where
        E::Value: Clone,
    {
        let mut values = Vec::new();
        let mut curr = start;
        while let Some(element) = curr {
            if values.len() == limit { break; }
            values.push(element.value().clone());
            curr = element.next();
        }
        values
    }

    #[test]
    fn test_list_ends_and_ring_wraps() {
        let list = DoublyLinkedList::from_iter([1, 2, 3]);
        let ring = CircularList::from_iter([1, 2, 3]);

        assert_eq!(forward(list.front(), 6), [1, 2, 3], "A list should end at its back element.");
        assert_eq!(forward(ring.cursor(), 6), [1, 2, 3, 1, 2, 3], "A ring should never end.");
    }
}
