use std::cell::{Ref, RefCell};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::rc::{Rc, Weak};

use crate::collections::Element;

pub(crate) type RingRef<T> = Rc<RingNode<T>>;
pub(crate) type Link<T> = Option<RingRef<T>>;

pub(crate) struct RingNode<T> {
    pub value: RefCell<T>,
    pub links: RefCell<Links<T>>,
}

/// `next` is only None once the ring owning the node has been dropped.
pub(crate) struct Links<T> {
    pub next: Link<T>,
    pub prev: Weak<RingNode<T>>,
}

impl<T> RingNode<T> {
    /// Creates a node which forms a ring of one on its own.
    pub fn single(value: T) -> RingRef<T> {
        let node = Rc::new_cyclic(|weak: &Weak<RingNode<T>>| RingNode {
            value: RefCell::new(value),
            links: RefCell::new(Links {
                next: None,
                prev: weak.clone(),
            }),
        });
        node.set_next(&node);
        node
    }

    pub fn next_node(&self) -> Link<T> {
        self.links.borrow().next.clone()
    }

    pub fn prev_node(&self) -> Link<T> {
        self.links.borrow().prev.upgrade()
    }

    pub fn set_next(&self, next: &RingRef<T>) {
        self.links.borrow_mut().next = Some(Rc::clone(next));
    }

    pub fn set_prev(&self, prev: &RingRef<T>) {
        self.links.borrow_mut().prev = Rc::downgrade(prev);
    }

    /// Clears both links, returning the strong link to the next node.
    pub fn detach(&self) -> Link<T> {
        let mut links = self.links.borrow_mut();
        links.prev = Weak::new();
        links.next.take()
    }
}

/// A handle to an element of a [`CircularList`](super::CircularList).
///
/// Within a ring, every element has both neighbours: a ring of one element is its own next and
/// previous element. Once the ring owning the element is dropped, the handle keeps the value
/// readable but reports no neighbours.
pub struct CircularListElement<T>(pub(crate) RingRef<T>);

impl<T> CircularListElement<T> {
    /// Returns true while the element is part of a ring.
    pub fn is_attached(&self) -> bool {
        self.0.links.borrow().next.is_some()
    }

    /// Replaces the value stored by this element, returning the old one.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed via [`Element::value`].
    pub fn replace(&self, value: T) -> T {
        mem::replace(&mut *self.0.value.borrow_mut(), value)
    }

    /// Sets the value stored by this element.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed via [`Element::value`].
    pub fn set_value(&self, value: T) {
        *self.0.value.borrow_mut() = value;
    }
}

impl<T> Element for CircularListElement<T> {
    type Value = T;

    fn value(&self) -> Ref<'_, T> {
        self.0.value.borrow()
    }

    fn next(&self) -> Option<Self> {
        self.0.next_node().map(CircularListElement)
    }

    fn prev(&self) -> Option<Self> {
        self.0.prev_node().map(CircularListElement)
    }
}

impl<T> Clone for CircularListElement<T> {
    fn clone(&self) -> Self {
        CircularListElement(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for CircularListElement<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for CircularListElement<T> {}

impl<T: Debug> Debug for CircularListElement<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CircularListElement")
            .field(&*self.value())
            .finish()
    }
}
