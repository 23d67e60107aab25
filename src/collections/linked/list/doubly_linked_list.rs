use std::cell::Ref;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use super::{DoublyLinkedListElement, Link, Node, NodeRef};
use crate::collections::Element;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, ForeignElement};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions, which hands out [`DoublyLinkedListElement`] handles to
/// its elements.
///
/// Internally, the list is a cycle running through a sentinel node that holds no value: an empty
/// list is a sentinel linked to itself. Element handles hide the sentinel, so the element at the
/// front reports no previous element and the element at the back reports no next element.
///
/// Every method that takes an element first checks that the element belongs to this list. If it
/// doesn't, the list is left untouched and [`ForeignElement`] is returned.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `m`: The number of items in the other list.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `insert_before/after` | `O(1)` |
/// | `remove` | `O(1)` |
/// | `move_to_front/back` | `O(1)` |
/// | `move_before/after` | `O(1)` |
/// | `push_front/back_list` | `O(m)` |
/// | `push_front/back_self` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) sentinel: NodeRef<T>,
    pub(crate) len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            sentinel: Node::sentinel(),
            len: 0,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element in the list, if it exists.
    pub fn front(&self) -> Option<DoublyLinkedListElement<T>> {
        if self.is_empty() { return None; }
        self.sentinel.next_node().map(DoublyLinkedListElement)
    }

    /// Returns the last element in the list, if it exists.
    pub fn back(&self) -> Option<DoublyLinkedListElement<T>> {
        if self.is_empty() { return None; }
        self.sentinel.prev_node().map(DoublyLinkedListElement)
    }

    /// Returns true if `element` belongs to this list.
    pub fn contains(&self, element: &DoublyLinkedListElement<T>) -> bool {
        element.0.is_owned_by(&self.sentinel)
    }

    /// Adds a new element holding `value` to the front of the list and returns it.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_front(&mut self, value: T) -> DoublyLinkedListElement<T> {
        let at = Rc::clone(&self.sentinel);
        self.insert(Node::with_value(value), &at)
    }

    /// Adds a new element holding `value` to the back of the list and returns it.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_back(&mut self, value: T) -> DoublyLinkedListElement<T> {
        // The sentinel is its own predecessor when the list is empty.
        let at = self.sentinel.prev_node().invariant();
        self.insert(Node::with_value(value), &at)
    }

    /// Inserts a new element holding `value` immediately before `mark` and returns it.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn insert_before(
        &mut self,
        value: T,
        mark: &DoublyLinkedListElement<T>,
    ) -> Result<DoublyLinkedListElement<T>, ForeignElement> {
        self.check_member(mark)?;
        let at = mark.0.prev_node().invariant();
        Ok(self.insert(Node::with_value(value), &at))
    }

    /// Inserts a new element holding `value` immediately after `mark` and returns it.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn insert_after(
        &mut self,
        value: T,
        mark: &DoublyLinkedListElement<T>,
    ) -> Result<DoublyLinkedListElement<T>, ForeignElement> {
        self.check_member(mark)?;
        Ok(self.insert(Node::with_value(value), &mark.0))
    }

    /// Removes `element` from the list, returning a borrow of the value it holds.
    ///
    /// The element becomes detached: it keeps its value but no longer has neighbours, and can't be
    /// used as a mark for this list anymore. Removing an element twice fails the second time
    /// without touching the list.
    pub fn remove<'e>(
        &mut self,
        element: &'e DoublyLinkedListElement<T>,
    ) -> Result<Ref<'e, T>, ForeignElement> {
        self.check_member(element)?;
        self.unlink(&element.0);
        Ok(element.value())
    }

    /// Moves `element` to the front of the list. Does nothing if it's already there.
    pub fn move_to_front(
        &mut self,
        element: &DoublyLinkedListElement<T>,
    ) -> Result<(), ForeignElement> {
        self.check_member(element)?;
        if self.front().as_ref() == Some(element) { return Ok(()); }

        self.unlink(&element.0);
        let at = Rc::clone(&self.sentinel);
        self.insert(Rc::clone(&element.0), &at);
        Ok(())
    }

    /// Moves `element` to the back of the list. Does nothing if it's already there.
    pub fn move_to_back(
        &mut self,
        element: &DoublyLinkedListElement<T>,
    ) -> Result<(), ForeignElement> {
        self.check_member(element)?;
        if self.back().as_ref() == Some(element) { return Ok(()); }

        self.unlink(&element.0);
        let at = self.sentinel.prev_node().invariant();
        self.insert(Rc::clone(&element.0), &at);
        Ok(())
    }

    /// Moves `element` so that it sits immediately before `mark`. Does nothing if both are the
    /// same element.
    pub fn move_before(
        &mut self,
        element: &DoublyLinkedListElement<T>,
        mark: &DoublyLinkedListElement<T>,
    ) -> Result<(), ForeignElement> {
        self.check_member(element)?;
        self.check_member(mark)?;
        if element == mark { return Ok(()); }

        self.unlink(&element.0);
        // Read after unlinking, element may have been the predecessor of mark.
        let at = mark.0.prev_node().invariant();
        self.insert(Rc::clone(&element.0), &at);
        Ok(())
    }

    /// Moves `element` so that it sits immediately after `mark`. Does nothing if both are the same
    /// element.
    pub fn move_after(
        &mut self,
        element: &DoublyLinkedListElement<T>,
        mark: &DoublyLinkedListElement<T>,
    ) -> Result<(), ForeignElement> {
        self.check_member(element)?;
        self.check_member(mark)?;
        if element == mark { return Ok(()); }

        self.unlink(&element.0);
        self.insert(Rc::clone(&element.0), &mark.0);
        Ok(())
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Appends a copy of every value in `other` to the back of this list, preserving their order.
    /// New elements are created, the elements of `other` are left where they are.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_back_list(&mut self, other: &DoublyLinkedList<T>) {
        self.copy_to_back(other.sentinel.next_node(), other.len);
    }

    /// Prepends a copy of every value in `other` to the front of this list, preserving their
    /// order.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_front_list(&mut self, other: &DoublyLinkedList<T>) {
        self.copy_to_front(other.sentinel.prev_node(), other.len);
    }

    /// Appends a copy of this list to itself, doubling its length.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_back_self(&mut self) {
        self.copy_to_back(self.sentinel.next_node(), self.len);
    }

    /// Prepends a copy of this list to itself, doubling its length.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_front_self(&mut self) {
        self.copy_to_front(self.sentinel.prev_node(), self.len);
    }

    // The count is taken before anything is inserted, so that copying a list into itself stops
    // before reaching the copies.
    fn copy_to_back(&mut self, mut source: Link<T>, count: usize) {
        for _ in 0..count {
            let node = source.invariant();
            let value = node.value().clone();
            self.push_back(value);
            source = node.next_node();
        }
    }

    fn copy_to_front(&mut self, mut source: Link<T>, count: usize) {
        for _ in 0..count {
            let node = source.invariant();
            let value = node.value().clone();
            self.push_front(value);
            source = node.prev_node();
        }
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn check_member(
        &self,
        element: &DoublyLinkedListElement<T>,
    ) -> Result<(), ForeignElement> {
        if self.contains(element) {
            Ok(())
        } else {
            test_trace!("rejected element from another list");
            Err(ForeignElement)
        }
    }

    /// Links `node` in after `at`, which must be the sentinel or an element of this list.
    pub(crate) fn insert(&mut self, node: NodeRef<T>, at: &NodeRef<T>) -> DoublyLinkedListElement<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let next = at.next_node().invariant();
        {
            let mut links = node.links.borrow_mut();
            links.prev = Rc::downgrade(at);
            links.next = Some(Rc::clone(&next));
            links.owner = Rc::downgrade(&self.sentinel);
        }
        next.links.borrow_mut().prev = Rc::downgrade(&node);
        at.links.borrow_mut().next = Some(Rc::clone(&node));

        test_trace!(len = self.len, "linked element");
        DoublyLinkedListElement(node)
    }

    /// Unlinks `node`, which must be an element of this list, and detaches it.
    pub(crate) fn unlink(&mut self, node: &NodeRef<T>) {
        let prev = node.prev_node().invariant();
        let next = node.detach().invariant();

        next.links.borrow_mut().prev = Rc::downgrade(&prev);
        prev.links.borrow_mut().next = Some(next);
        self.len -= 1;

        test_trace!(len = self.len, "unlinked element");
    }

    pub(crate) fn for_each_value(&self, mut f: impl FnMut(&T)) {
        let mut curr = self.sentinel.next_node().invariant();
        while !Rc::ptr_eq(&curr, &self.sentinel) {
            f(&*curr.value());
            let next = curr.next_node().invariant();
            curr = next;
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut curr = Rc::clone(&self.sentinel);
        loop {
            // UNWRAP: This needs to panic if either link is missing.
            let next = curr.next_node().unwrap();
            assert!(Rc::ptr_eq(&next.prev_node().unwrap(), &curr));
            if Rc::ptr_eq(&next, &self.sentinel) { break; }

            assert!(next.is_owned_by(&self.sentinel));
            count += 1;
            curr = next;
        }
        assert_eq!(count, self.len);
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        // Walk the cycle detaching every node, so outstanding handles see detached elements and
        // no strong cycle survives the list.
        let mut curr = self.sentinel.detach();
        while let Some(node) = curr {
            curr = node.detach();
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut contents = f.debug_list();
        self.for_each_value(|value| {
            contents.entry(value);
        });
        contents.finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        let mut first = true;
        self.for_each_value(|value| {
            if result.is_err() { return; }
            result = if first {
                write!(f, "({value:?})")
            } else {
                write!(f, " -> ({value:?})")
            };
            first = false;
        });
        result
    }
}
