//! Linked collection types. Primarily revolves around [`DoublyLinkedList`] and its accompanying
//! [`DoublyLinkedListElement`] handle type.

pub mod list;

#[doc(inline)]
pub use list::{DoublyLinkedList, DoublyLinkedListElement};
