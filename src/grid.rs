use smallvec::SmallVec;

// Lines of typical grids fit inline; longer ones spill to the heap.
const DEFAULT_SMALLVEC_SIZE: usize = 32;

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
///
/// Used for the copied rows and columns returned by
/// [`GridLike::rows`](crate::GridLike::rows) and
/// [`GridLike::columns`](crate::GridLike::columns).
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// Implements the traits both grid kinds share on top of their `store` field.
macro_rules! impl_grid_kind {
    ($kind:ident) => {
        impl<E> $crate::grid_like::sealed::Sealed for $kind<E> {}

        impl<E> $crate::GridLike for $kind<E> {
            type Elem = E;

            fn store(&self) -> &$crate::Store<E> {
                &self.store
            }
        }

        /// Grids are equal when their sizes and row-major cells are, whatever their kind.
        impl<E, G> PartialEq<G> for $kind<E>
        where
            E: PartialEq,
            G: $crate::GridLike<Elem = E>,
        {
            fn eq(&self, other: &G) -> bool {
                self.store == *other.store()
            }
        }

        impl<E: Eq> Eq for $kind<E> {}

        impl<E: std::hash::Hash> std::hash::Hash for $kind<E> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.store, state);
            }
        }

        impl<E: std::fmt::Display> std::fmt::Display for $kind<E> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.store, f)
            }
        }

        /// Panics on an out-of-bounds coordinate; use `get` for the checked form.
        impl<E> std::ops::Index<(usize, usize)> for $kind<E> {
            type Output = E;

            fn index(&self, (x, y): (usize, usize)) -> &E {
                self.store.at(x, y)
            }
        }

        impl<'a, E> IntoIterator for &'a $kind<E> {
            type Item = &'a E;
            type IntoIter = std::slice::Iter<'a, E>;

            fn into_iter(self) -> Self::IntoIter {
                self.store.cells().iter()
            }
        }

        impl<E> IntoIterator for $kind<E> {
            type Item = E;
            type IntoIter = std::vec::IntoIter<E>;

            fn into_iter(self) -> Self::IntoIter {
                self.store.into_cells().into_iter()
            }
        }
    };
}

mod immutable;
mod mutable;
mod store;

pub use immutable::{grid_of, Grid};
pub use mutable::MutableGrid;
pub use store::Store;
