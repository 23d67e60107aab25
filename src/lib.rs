//! Two linked containers that hand out handles to their elements: a [`DoublyLinkedList`] anchored
//! by a hidden sentinel, and a [`CircularList`] (ring) observed through a movable cursor.
//!
//! # Purpose
//! Most linked lists in Rust hide their nodes and only expose values. The types here expose the
//! elements themselves, which is what makes linked structures worth using: inserting next to an
//! element you already hold, moving it, or cutting a ring at it are all `O(1)`.
//!
//! # Method
//! Elements are reference counted handles. A list or ring owns the strong cycle running through
//! its elements, and breaks it when dropped, so no memory is leaked no matter how many handles are
//! still around. Element handles implement the shared [`Element`] trait for reading a value and
//! stepping to a neighbour.
//!
//! # Error Handling
//! Passing an element that belongs to a different list to a [`DoublyLinkedList`] method returns
//! [`ForeignElement`] and leaves every list untouched. Moving the cursor of an empty ring is a
//! usage error: the `try_` methods return [`EmptyRing`], while their shorter counterparts panic
//! with the same message.
//!
//! # Threading
//! Both containers are single threaded. Handles are `!Send`, so sharing a container across threads
//! isn't possible without wrapping all access in something that owns it on one thread.
//!
//! [`DoublyLinkedList`]: collections::linked::DoublyLinkedList
//! [`CircularList`]: collections::circ::CircularList
//! [`Element`]: collections::Element
//! [`ForeignElement`]: collections::ForeignElement
//! [`EmptyRing`]: collections::EmptyRing

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[macro_use]
pub(crate) mod util;

pub mod collections;
