//! Circular collection types. Revolves around [`CircularList`], a ring of elements with a
//! movable cursor, and its [`CircularListElement`] handles.

mod circular_list;
mod node;

pub use circular_list::*;
pub use node::CircularListElement;
pub(crate) use node::*;
