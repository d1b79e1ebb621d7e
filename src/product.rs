//! Element products built on unseeded inject.

use crate::collections::Sequence;
use crate::traverse::{EmptyReduce, Enumerable};
use std::ops::Mul;

/// Product of every element in the sequence, folded with unseeded
/// [`inject_first`](Enumerable::inject_first). An empty sequence has no
/// first element to seed the product with and fails with [`EmptyReduce`].
pub fn multiply_elements<T>(numbers: &Sequence<T>) -> Result<T, EmptyReduce>
where
    T: Mul<Output = T> + Clone,
{
    numbers.inject_first(|product, element| product * element.clone())
}
