//! Traversal Protocol
//!
//! From-scratch implementation of the core enumeration operations:
//! - each, each_with_index
//! - select, filter, reject
//! - all, any, none
//! - count_where
//! - map (via map_into)
//! - inject, reduce
//!
//! Everything derives from a single traversal primitive: implementors
//! supply `try_each` and inherit the rest as default methods. The two
//! exceptions are `inject` and `inject_first`, which walk the container's
//! storage directly because the unseeded mode must special-case the first
//! element.

use std::fmt;
use std::ops::ControlFlow;

/// Error returned by the unseeded reduce family when the container holds
/// no first element to seed the accumulator with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyReduce;

impl fmt::Display for EmptyReduce {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no elements to reduce: container is empty and no seed was supplied")
    }
}

impl std::error::Error for EmptyReduce {}

/// Capability to rebuild a result container of the same kind, element by
/// element. `select` and `map_into` construct their outputs through this
/// trait so that ordering and container kind are preserved.
pub trait Rebuild<T> {
    /// Create an empty container of this kind
    fn empty() -> Self;

    /// Add one element at the end of the traversal order
    fn append(&mut self, item: T);
}

/// Shared traversal interface over sequence and mapping containers.
///
/// `Item` is a single value for a sequence and a key/value pair for a
/// mapping. Implementors supply `try_each`, `inject`, and `inject_first`;
/// every other operation is a default method composed on top of the
/// traversal primitive.
pub trait Enumerable {
    type Item;

    /// Core traversal primitive. Visits elements in the container's
    /// natural order (sequence order, or mapping insertion order) and
    /// stops at the first `Break` the visitor returns. The quantifiers
    /// use the break channel to stop scanning early.
    fn try_each<F>(&self, f: F) -> ControlFlow<()>
    where
        F: FnMut(&Self::Item) -> ControlFlow<()>;

    /// Seeded accumulation. Threads `combine(accumulator, element)` across
    /// every element in order; an empty container returns the seed
    /// unchanged. Implemented per container with a direct loop over
    /// storage rather than through `each`.
    fn inject<A, F>(&self, seed: A, combine: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A;

    /// Unseeded accumulation. The first element becomes the accumulator
    /// and the remaining elements are combined in. Fails with
    /// [`EmptyReduce`] when there is no first element.
    fn inject_first<F>(&self, combine: F) -> Result<Self::Item, EmptyReduce>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item) -> Self::Item;

    /// Invoke `f` once per element, full pass, natural order. Returns the
    /// original container so calls can be chained.
    fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Self::Item),
    {
        let _ = self.try_each(|item| {
            f(item);
            ControlFlow::Continue(())
        });
        self
    }

    /// Invoke `f(element, index)` once per element. The index starts at 0
    /// and increments once per element regardless of container kind.
    fn each_with_index<F>(&self, mut f: F)
    where
        F: FnMut(&Self::Item, usize),
    {
        let mut index = 0;
        self.each(|item| {
            f(item, index);
            index += 1;
        });
    }

    /// Build a new container of the same kind holding the elements the
    /// predicate accepts. Ordering preserved; an empty input yields an
    /// empty output of the same kind.
    fn select<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized + Rebuild<Self::Item>,
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut result = Self::empty();
        self.each(|item| {
            if predicate(item) {
                result.append(item.clone());
            }
        });
        result
    }

    /// Alias for [`select`](Enumerable::select)
    fn filter<P>(&self, predicate: P) -> Self
    where
        Self: Sized + Rebuild<Self::Item>,
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        self.select(predicate)
    }

    /// Complement of [`select`](Enumerable::select): keeps the elements
    /// the predicate refuses.
    fn reject<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized + Rebuild<Self::Item>,
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        self.select(|item| !predicate(item))
    }

    /// True when every element satisfies the predicate. Stops at the
    /// first falsifying element. Vacuously true for an empty container.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_each(|item| {
            if predicate(item) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// True when at least one element satisfies the predicate. Stops at
    /// the first satisfying element. False for an empty container.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_each(|item| {
            if predicate(item) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// True when no element satisfies the predicate. Negation of
    /// [`any`](Enumerable::any), with the same early exit.
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(predicate)
    }

    /// Number of elements satisfying the predicate. Full pass, no early
    /// exit. Zero for an empty container.
    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut count = 0;
        self.each(|item| {
            if predicate(item) {
                count += 1;
            }
        });
        count
    }

    /// Transform every element into a rebuilt container. The containers
    /// expose kind-preserving `map` wrappers over this method; calling it
    /// directly chooses the output container by type annotation, like the
    /// standard collect.
    fn map_into<U, C, F>(&self, mut transform: F) -> C
    where
        C: Rebuild<U>,
        F: FnMut(&Self::Item) -> U,
    {
        let mut result = C::empty();
        self.each(|item| {
            result.append(transform(item));
        });
        result
    }

    /// Alias for [`inject`](Enumerable::inject)
    fn reduce<A, F>(&self, seed: A, combine: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        self.inject(seed, combine)
    }

    /// Alias for [`inject_first`](Enumerable::inject_first)
    fn reduce_first<F>(&self, combine: F) -> Result<Self::Item, EmptyReduce>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item) -> Self::Item,
    {
        self.inject_first(combine)
    }
}
