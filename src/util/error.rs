use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided element isn't a member of the collection that was asked to operate on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignElement;

impl Display for ForeignElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Element does not belong to this collection!")
    }
}

impl Error for ForeignElement {}

/// A cursor operation was attempted on a ring with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRing;

impl Display for EmptyRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to move the cursor of an empty ring!")
    }
}

impl Error for EmptyRing {}

/// The length of a list would no longer fit in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Failure of a ring splice, which needs both a non-empty ring and a target inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RingError {
    /// The ring has no cursor to splice after.
    EmptyRing(EmptyRing),
    /// The target element is part of a different ring.
    ForeignElement(ForeignElement),
}
