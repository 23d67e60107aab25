//! Linked collection types with element handles.
//!
//! # Purpose
//! Both collections here hand out handles to their elements rather than references to values.
//! Handles stay valid while the collection is restructured around them, which lets callers insert
//! relative to an element, move it, or splice at it in `O(1)`.
//!
//! # Method
//! Nodes are reference counted. Forward links are strong and backward links are weak, so each
//! container owns exactly one cycle of strong links which it breaks when dropped. Handles that
//! outlive their container still read their value but report no neighbours.

pub mod element;

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use element::Element;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyRing, ForeignElement, RingError};
