//! Scripture references for koine.
//!
//! Three layers of location:
//!
//! - [`Reference`]: a chapter (`3`) or a verse (`3.16`, `3:16`, `3.16a`)
//! - [`CompoundReference`]: a single reference or an inclusive range (`3.16-18`, `3-4`)
//! - [`BookReference`]: a book name with an optional compound reference (`1 John 2:1-5`)
//!
//! # Example
//!
//! ```
//! use koine_reference::{BookReference, Reference};
//!
//! let within: BookReference = "John 3".parse().unwrap();
//! assert!(within.contains_location("John", &Reference::verse(3, 16)));
//! ```

#![warn(missing_docs)]

mod book;
mod error;
mod range;
mod reference;

pub use book::BookReference;
pub use error::ReferenceError;
pub use range::CompoundReference;
pub use reference::Reference;
