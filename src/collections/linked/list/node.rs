use std::cell::{Ref, RefCell};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ptr;
use std::rc::{Rc, Weak};

use crate::collections::Element;
use crate::util::option::OptionExtension;

pub(crate) type NodeRef<T> = Rc<Node<T>>;
pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: The value and the links live in separate cells, so a caller holding a borrowed value never
// blocks the list from relinking the element around it.

pub(crate) struct Node<T> {
    /// Always Some, except for the sentinel of a list.
    pub value: RefCell<Option<T>>,
    pub links: RefCell<Links<T>>,
}

pub(crate) struct Links<T> {
    pub next: Link<T>,
    pub prev: Weak<Node<T>>,
    /// Points at the sentinel of the list this node belongs to.
    pub owner: Weak<Node<T>>,
}

impl<T> Links<T> {
    pub const fn detached() -> Links<T> {
        Links {
            next: None,
            prev: Weak::new(),
            owner: Weak::new(),
        }
    }
}

impl<T> Node<T> {
    pub fn with_value(value: T) -> NodeRef<T> {
        Rc::new(Node {
            value: RefCell::new(Some(value)),
            links: RefCell::new(Links::detached()),
        })
    }

    /// Creates a valueless node which links to itself in both directions.
    pub fn sentinel() -> NodeRef<T> {
        let sentinel = Rc::new_cyclic(|weak: &Weak<Node<T>>| Node {
            value: RefCell::new(None),
            links: RefCell::new(Links {
                next: None,
                prev: weak.clone(),
                owner: weak.clone(),
            }),
        });
        sentinel.links.borrow_mut().next = Some(Rc::clone(&sentinel));
        sentinel
    }

    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.value.borrow(), |value| value.as_ref().invariant())
    }

    pub fn next_node(&self) -> Link<T> {
        self.links.borrow().next.clone()
    }

    pub fn prev_node(&self) -> Link<T> {
        self.links.borrow().prev.upgrade()
    }

    pub fn is_owned_by(&self, sentinel: &NodeRef<T>) -> bool {
        ptr::eq(self.links.borrow().owner.as_ptr(), Rc::as_ptr(sentinel))
    }

    /// Clears all links, returning the strong link to the next node so the caller decides when it
    /// is dropped.
    pub fn detach(&self) -> Link<T> {
        let mut links = self.links.borrow_mut();
        let next = links.next.take();
        *links = Links::detached();
        next
    }
}

/// A handle to an element of a [`DoublyLinkedList`](super::DoublyLinkedList).
///
/// An element is either detached or attached to exactly one list. Detached elements (those
/// created with [`DoublyLinkedListElement::new`] or removed from their list) still hold their
/// value, but have no neighbours. Only the owning list can change which list an element belongs
/// to.
pub struct DoublyLinkedListElement<T>(pub(crate) NodeRef<T>);

impl<T> DoublyLinkedListElement<T> {
    /// Creates a new element that doesn't belong to any list.
    pub fn new(value: T) -> DoublyLinkedListElement<T> {
        DoublyLinkedListElement(Node::with_value(value))
    }

    /// Returns true if the element currently belongs to a list.
    pub fn is_attached(&self) -> bool {
        self.0.links.borrow().owner.strong_count() > 0
    }

    /// Replaces the value stored by this element, returning the old one.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed via [`Element::value`].
    pub fn replace(&self, value: T) -> T {
        mem::replace(&mut *self.0.value.borrow_mut(), Some(value)).invariant()
    }

    /// Sets the value stored by this element.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed via [`Element::value`].
    pub fn set_value(&self, value: T) {
        self.replace(value);
    }
}

impl<T> Element for DoublyLinkedListElement<T> {
    type Value = T;

    fn value(&self) -> Ref<'_, T> {
        self.0.value()
    }

    fn next(&self) -> Option<Self> {
        let links = self.0.links.borrow();
        let owner = links.owner.upgrade()?;
        links.next.as_ref()
            .filter(|next| !Rc::ptr_eq(next, &owner))
            .map(|next| DoublyLinkedListElement(Rc::clone(next)))
    }

    fn prev(&self) -> Option<Self> {
        let links = self.0.links.borrow();
        let owner = links.owner.upgrade()?;
        links.prev.upgrade()
            .filter(|prev| !Rc::ptr_eq(prev, &owner))
            .map(DoublyLinkedListElement)
    }
}

impl<T> Clone for DoublyLinkedListElement<T> {
    fn clone(&self) -> Self {
        DoublyLinkedListElement(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for DoublyLinkedListElement<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for DoublyLinkedListElement<T> {}

impl<T: Debug> Debug for DoublyLinkedListElement<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedListElement")
            .field("value", &*self.value())
            .field("attached", &self.is_attached())
            .finish()
    }
}
