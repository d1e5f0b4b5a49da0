use std::fmt;

/// A lazy cartesian product of an outer and an inner sequence.
///
/// For every element `a` of the outer sequence, in order, the inner sequence
/// is walked from the start and `(a, b)` is yielded for each of its elements
/// `b`. The inner sequence is re-created from a clone of its source for every
/// outer element, so it must be cheap to clone (ranges, slices, borrowed
/// collections).
///
/// # Example
/// ```
/// use basiks::combine;
///
/// let pairs: Vec<_> = combine(0..2, ['a', 'b']).collect();
/// assert_eq!(pairs, vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b')]);
/// ```
pub struct Combined<A, B>
where
    A: Iterator,
    B: IntoIterator,
{
    outer: A,
    inner: B,
    current: Option<(A::Item, B::IntoIter)>,
}

impl<A, B> Clone for Combined<A, B>
where
    A: Iterator + Clone,
    A::Item: Clone,
    B: IntoIterator + Clone,
    B::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            current: self.current.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Combined<A, B>
where
    A: Iterator + fmt::Debug,
    A::Item: fmt::Debug,
    B: IntoIterator + fmt::Debug,
    B::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combined")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("current", &self.current)
            .finish()
    }
}

/// Creates the cartesian product of `outer` and `inner`, outer-major.
pub fn combine<A, B>(outer: A, inner: B) -> Combined<A::IntoIter, B>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator + Clone,
{
    Combined {
        outer: outer.into_iter(),
        inner,
        current: None,
    }
}

/// Adds [`with`](CombineExt::with) to every [`IntoIterator`].
///
/// # Example
/// ```
/// use basiks::CombineExt;
///
/// let sums: Vec<_> = (0..3).with(0..2).map(|(x, y)| x + y).collect();
/// assert_eq!(sums, vec![0, 1, 1, 2, 2, 3]);
/// ```
pub trait CombineExt: IntoIterator + Sized {
    /// Same as [`combine(self, inner)`](combine).
    fn with<B>(self, inner: B) -> Combined<Self::IntoIter, B>
    where
        Self::Item: Clone,
        B: IntoIterator + Clone,
    {
        combine(self, inner)
    }
}

impl<T: IntoIterator> CombineExt for T {}

impl<A, B> Iterator for Combined<A, B>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator + Clone,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((a, inner)) = self.current.as_mut() {
                if let Some(b) = inner.next() {
                    return Some((a.clone(), b));
                }
            }
            let a = self.outer.next()?;
            self.current = Some((a, self.inner.clone().into_iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (current_low, current_high) = match &self.current {
            Some((_, inner)) => inner.size_hint(),
            None => (0, Some(0)),
        };
        let (outer_low, outer_high) = self.outer.size_hint();
        let (inner_low, inner_high) = self.inner.clone().into_iter().size_hint();

        let low = current_low.saturating_add(outer_low.saturating_mul(inner_low));
        let rest_high = match (outer_high, inner_high) {
            (Some(0), _) | (_, Some(0)) => Some(0),
            (Some(outer), Some(inner)) => outer.checked_mul(inner),
            _ => None,
        };
        let high = current_high
            .zip(rest_high)
            .and_then(|(current, rest)| current.checked_add(rest));
        (low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_combined_range_matches_nested_loops() {
        let expected: Vec<i32> = (0..=10)
            .flat_map(|x| (0..=5).map(move |y| x + y))
            .collect();

        let result: Vec<i32> = combine(0..=10, 0..=5).map(|(x, y)| x + y).collect();

        assert_eq!(expected, result);
    }

    #[test]
    fn test_combined_flat_map() {
        let expected: Vec<i32> = (0..10)
            .flat_map(|x| (0..5).map(move |y| (x, y)))
            .flat_map(|(x, y)| x..=y)
            .collect();

        let actual: Vec<i32> = (0..10).with(0..5).flat_map(|(x, y)| x..=y).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(combine(0..0, 0..3).count(), 0);
        assert_eq!(combine(0..3, 0..0).count(), 0);
    }

    #[test]
    fn test_restartable_by_calling_again() {
        let rows = vec!["a", "b"];
        let first: Vec<_> = combine(&rows, 0..2).collect();
        let second: Vec<_> = combine(&rows, 0..2).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_size_hint_tracks_remaining_pairs() {
        let mut pairs = combine(0..3, 0..4);
        assert_eq!(pairs.size_hint(), (12, Some(12)));

        pairs.nth(4);
        assert_eq!(pairs.size_hint(), (7, Some(7)));
        assert_eq!(pairs.by_ref().count(), 7);
        assert_eq!(pairs.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_unbounded_outer() {
        assert_eq!(combine(0.., 0..2).size_hint(), (usize::MAX, None));
        assert_eq!(combine(0.., 0..0).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_clone_resumes_from_same_position() {
        let mut pairs = combine(0..2, 0..3);
        pairs.next();
        let rest: Vec<_> = pairs.clone().collect();
        assert_eq!(rest, pairs.collect::<Vec<_>>());
        assert_eq!(rest.len(), 5);
    }

    #[test]
    fn test_debug() {
        let pairs = combine(0..1, 0..1);
        assert_eq!(
            format!("{pairs:?}"),
            "Combined { outer: 0..1, inner: 0..1, current: None }"
        );
    }

    proptest! {
        #[test]
        fn test_combined_length_and_order(m in 0..20usize, n in 0..20usize) {
            let pairs: Vec<(usize, usize)> = combine(0..m, 0..n).collect();
            prop_assert_eq!(combine(0..m, 0..n).size_hint(), (m * n, Some(m * n)));
            prop_assert_eq!(pairs.len(), m * n);
            for (i, (a, b)) in pairs.into_iter().enumerate() {
                prop_assert_eq!((a, b), (i / n, i % n));
            }
        }
    }
}
