use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use super::{CircularListElement, Link, RingNode, RingRef};
#[doc(inline)]
pub use crate::util::error::{EmptyRing, ForeignElement, RingError};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A ring of elements with no start or end, observed through a single movable cursor.
///
/// Every element of a ring holds a value; there is no sentinel. The ring is only ever accessed
/// relative to the element under the cursor, which is also the only state the CircularList keeps.
/// Because of this, the length isn't cached and is counted by walking the ring.
///
/// Rings can be merged with [`link`](CircularList::link) and split with
/// [`link_element`](CircularList::link_element) or [`unlink`](CircularList::unlink). Both are the
/// same splice after the cursor: splicing in a node of another ring merges the two rings, while
/// splicing in a node of the same ring cuts out everything between the cursor and that node.
///
/// Cursor movement on an empty ring is a usage error. The `try_` methods report it as
/// [`EmptyRing`], the others panic.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularList.
/// - `k`: The number of steps requested.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(n)` |
/// | `cursor` | `O(1)` |
/// | `move_next/prev` | `O(1)` |
/// | `move_by` | `O(k)` |
/// | `link` | `O(1)` |
/// | `link_element` | `O(n)` |
/// | `unlink` | `O(k)` |
/// | `walk` | `O(n)` |
pub struct CircularList<T> {
    pub(crate) cursor: Link<T>,
}

impl<T> CircularList<T> {
    /// Creates a CircularList with no elements and no cursor.
    pub const fn empty() -> CircularList<T> {
        CircularList {
            cursor: None,
        }
    }

    /// Creates a CircularList of a single element, which is its own next and previous element.
    pub fn with_value(value: T) -> CircularList<T> {
        CircularList {
            cursor: Some(RingNode::single(value)),
        }
    }

    /// Returns the element under the cursor, if the ring isn't empty.
    pub fn cursor(&self) -> Option<CircularListElement<T>> {
        self.cursor.clone().map(CircularListElement)
    }

    /// Counts the elements of the ring, walking all the way around it.
    pub fn len(&self) -> usize {
        match &self.cursor {
            None => 0,
            Some(cursor) => {
                let mut len = 1;
                let mut curr = cursor.next_node().invariant();
                while !Rc::ptr_eq(&curr, cursor) {
                    len += 1;
                    curr = curr.next_node().invariant();
                }
                len
            },
        }
    }

    /// Returns true if the CircularList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.cursor.is_none()
    }

    /// Returns true if `element` is part of this ring.
    pub fn contains(&self, element: &CircularListElement<T>) -> bool {
        let Some(cursor) = &self.cursor else { return false; };

        let mut curr = Rc::clone(cursor);
        loop {
            if Rc::ptr_eq(&curr, &element.0) { return true; }
            curr = curr.next_node().invariant();
            if Rc::ptr_eq(&curr, cursor) { return false; }
        }
    }

    /// Moves the cursor one element forward and returns the new cursor element, panicking on an
    /// empty ring.
    ///
    /// # Panics
    /// Panics if the CircularList is empty.
    pub fn move_next(&mut self) -> CircularListElement<T> {
        self.try_move_next().throw()
    }

    /// Moves the cursor one element forward and returns the new cursor element, returning an
    /// [`Err`] on an empty ring rather than panicking.
    pub fn try_move_next(&mut self) -> Result<CircularListElement<T>, EmptyRing> {
        let cursor = self.cursor.as_ref().ok_or(EmptyRing)?;
        let next = cursor.next_node().invariant();
        self.cursor = Some(Rc::clone(&next));
        Ok(CircularListElement(next))
    }

    /// Moves the cursor one element backward and returns the new cursor element, panicking on an
    /// empty ring.
    ///
    /// # Panics
    /// Panics if the CircularList is empty.
    pub fn move_prev(&mut self) -> CircularListElement<T> {
        self.try_move_prev().throw()
    }

    /// Moves the cursor one element backward and returns the new cursor element, returning an
    /// [`Err`] on an empty ring rather than panicking.
    pub fn try_move_prev(&mut self) -> Result<CircularListElement<T>, EmptyRing> {
        let cursor = self.cursor.as_ref().ok_or(EmptyRing)?;
        let prev = cursor.prev_node().invariant();
        self.cursor = Some(Rc::clone(&prev));
        Ok(CircularListElement(prev))
    }

    /// Moves the cursor `n` elements, forward if `n` is positive or backward if it's negative,
    /// and returns the new cursor element. The steps are taken one at a time, so moving by `n`
    /// costs `O(|n|)` even when `n` exceeds the length of the ring.
    ///
    /// # Panics
    /// Panics if the CircularList is empty.
    pub fn move_by(&mut self, n: isize) -> CircularListElement<T> {
        self.try_move_by(n).throw()
    }

    /// Moves the cursor `n` elements like [`move_by`](CircularList::move_by), returning an
    /// [`Err`] on an empty ring rather than panicking.
    pub fn try_move_by(&mut self, n: isize) -> Result<CircularListElement<T>, EmptyRing> {
        let cursor = self.cursor.clone().ok_or(EmptyRing)?;
        let node = if n < 0 {
            Self::seek_bwd(cursor, n.unsigned_abs())
        } else {
            Self::seek_fwd(cursor, n.unsigned_abs())
        };
        self.cursor = Some(Rc::clone(&node));
        Ok(CircularListElement(node))
    }

    /// Splices the ring held by `other` in after the cursor, leaving `other` empty.
    ///
    /// Returns the element that followed the cursor before the splice, which now follows the last
    /// element taken from `other`. If `other` is empty, nothing changes and the element after the
    /// cursor is returned.
    pub fn link(
        &mut self,
        other: &mut CircularList<T>,
    ) -> Result<CircularListElement<T>, EmptyRing> {
        let cursor = self.cursor.as_ref().ok_or(EmptyRing)?;
        let next = match other.cursor.take() {
            Some(target) => Self::splice(cursor, &target),
            None => cursor.next_node().invariant(),
        };
        Ok(CircularListElement(next))
    }

    /// Links the cursor directly to `target`, an element of this ring, cutting out every element
    /// strictly between the two.
    ///
    /// The elements cut out are returned as their own ring, with the cursor on the element which
    /// used to follow this ring's cursor. If `target` already follows the cursor, nothing is cut
    /// and the returned ring is empty. If `target` is the cursor itself, every other element is
    /// cut out.
    pub fn link_element(
        &mut self,
        target: &CircularListElement<T>,
    ) -> Result<CircularList<T>, RingError> {
        let cursor = self.cursor.as_ref().ok_or(EmptyRing)?;
        if !self.contains(target) {
            return Err(ForeignElement.into());
        }
        Ok(Self::excise(cursor, &target.0))
    }

    /// Removes `n % len` elements from the ring, starting with the element after the cursor, and
    /// returns them as their own ring with the cursor on the first removed element.
    ///
    /// Returns [`None`] when nothing is removed, either because `n` is zero or because it's a
    /// multiple of the length of the ring. In that case the element after the cursor is still part
    /// of this ring, so it's left in place rather than handed out as the start of a removed ring.
    pub fn unlink(&mut self, n: usize) -> Result<Option<CircularList<T>>, EmptyRing> {
        if n == 0 { return Ok(None); }
        let cursor = self.cursor.as_ref().ok_or(EmptyRing)?;

        // The first element kept after the removed run is n + 1 steps from the cursor.
        let target = Self::seek_fwd(Rc::clone(cursor), n).next_node().invariant();
        let removed = Self::excise(cursor, &target);
        Ok((!removed.is_empty()).then_some(removed))
    }

    /// Calls `f` on the value of each element, in forward order starting at the cursor.
    ///
    /// # Panics
    /// Panics if `f` sets the value of an element of this ring through a handle.
    pub fn walk(&self, mut f: impl FnMut(&T)) {
        let Some(cursor) = &self.cursor else { return; };

        let mut curr = Rc::clone(cursor);
        loop {
            f(&*curr.value.borrow());
            curr = curr.next_node().invariant();
            if Rc::ptr_eq(&curr, cursor) { break; }
        }
    }
}

impl<T: Default> CircularList<T> {
    /// Creates a CircularList of `n` elements holding default values, with the cursor on the
    /// first one created. A size of zero creates an empty ring.
    pub fn new(n: usize) -> CircularList<T> {
        (0..n).map(|_| T::default()).collect()
    }
}

impl<T> CircularList<T> {
    pub(crate) fn seek_fwd(mut node: RingRef<T>, count: usize) -> RingRef<T> {
        for _ in 0..count {
            node = node.next_node().invariant();
        }
        node
    }

    pub(crate) fn seek_bwd(mut node: RingRef<T>, count: usize) -> RingRef<T> {
        for _ in 0..count {
            node = node.prev_node().invariant();
        }
        node
    }

    /// Makes `target` follow `cursor`, returning the node that followed `cursor` beforehand.
    ///
    /// If `target` belongs to another ring, that ring is inserted whole after `cursor`. If it
    /// belongs to the same ring, the nodes strictly between `cursor` and `target` close into a
    /// ring of their own, headed by the returned node.
    pub(crate) fn splice(cursor: &RingRef<T>, target: &RingRef<T>) -> RingRef<T> {
        let next = cursor.next_node().invariant();
        let last = target.prev_node().invariant();

        cursor.set_next(target);
        target.set_prev(cursor);
        next.set_prev(&last);
        last.set_next(&next);

        test_trace!("spliced ring after cursor");
        next
    }

    /// Splices within a single ring, wrapping whatever was cut out so that it has an owner.
    pub(crate) fn excise(cursor: &RingRef<T>, target: &RingRef<T>) -> CircularList<T> {
        let next = Self::splice(cursor, target);
        if Rc::ptr_eq(&next, target) {
            CircularList::empty()
        } else {
            test_trace!("excised sub-ring");
            CircularList {
                cursor: Some(next),
            }
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        let Some(cursor) = &self.cursor else { return; };

        let mut curr = Rc::clone(cursor);
        loop {
            // UNWRAP: This needs to panic if either link is missing.
            let next = curr.next_node().unwrap();
            assert!(Rc::ptr_eq(&next.prev_node().unwrap(), &curr));
            if Rc::ptr_eq(&next, cursor) { break; }
            curr = next;
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        let Some(first) = iter.next() else { return CircularList::empty(); };

        let root = RingNode::single(first);
        let mut last = Rc::clone(&root);
        for value in iter {
            let node = RingNode::single(value);
            node.set_prev(&last);
            last.set_next(&node);
            last = node;
        }
        last.set_next(&root);
        root.set_prev(&last);

        CircularList {
            cursor: Some(root),
        }
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        let Some(cursor) = self.cursor.take() else { return; };

        let mut curr = cursor.detach();
        while let Some(node) = curr {
            curr = node.detach();
        }
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut contents = f.debug_list();
        self.walk(|value| {
            contents.entry(value);
        });
        contents.finish()
    }
}

impl<T: Debug> Display for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        let mut first = true;
        self.walk(|value| {
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
