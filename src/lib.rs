//! # Enumerable - A Collection Enumeration Protocol
//!
//! A from-scratch reimplementation of the core collection-enumeration
//! protocol, built for study: every derived operation composes from one
//! foundational traversal primitive.
//!
//! ## Composition
//!
//! ```text
//! try_each (traversal primitive)
//!     ↓ [each]
//! each_with_index
//! select / filter / reject
//! all / any / none
//! count_where
//! map
//!
//! inject / reduce (direct traversal, first-element special case)
//!     ↓
//! multiply_elements
//! ```
//!
//! Two container kinds implement the protocol: [`Sequence`], an ordered
//! sequence, and [`OrderedMap`], a key-unique mapping that iterates in
//! insertion order. Selection and transformation rebuild a container of
//! the same kind as their input, with relative ordering preserved.
//!
//! ## Usage
//!
//! ```
//! use enumerable::{Enumerable, Sequence, multiply_elements};
//!
//! let numbers = Sequence::from([1, 2, 3, 4, 5, 6]);
//! assert_eq!(numbers.select(|x| x % 2 == 0), Sequence::from([2, 4, 6]));
//! assert_eq!(numbers.count_where(|x| x % 2 == 0), 3);
//! assert_eq!(multiply_elements(&Sequence::from([2, 4, 5])), Ok(40));
//! ```

// Traversal Protocol
pub mod traverse;

// Containers
pub mod collections;

// Consumers
pub mod product;

pub use collections::{OrderedMap, Sequence};
pub use product::multiply_elements;
pub use traverse::{EmptyReduce, Enumerable, Rebuild};
