mod doubly_linked_list;
mod node;
mod tests;

pub use doubly_linked_list::*;
pub use node::DoublyLinkedListElement;
pub(crate) use node::*;
