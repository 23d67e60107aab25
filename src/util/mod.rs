#![warn(missing_docs)]

#[macro_use]
pub mod trace;

pub mod error;
pub mod option;
pub mod panic;
pub mod result;
