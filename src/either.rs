/// A value of either type `A` or type `B`.
///
/// `Either` is right-biased: [`Either::into_option`] keeps the `Right` value
/// and converting from a [`Result`] puts `Ok` on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Either<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> Either<A, B> {
    /// Applies `left_fn` or `right_fn` depending on the side, returning a common type.
    ///
    /// # Example
    /// ```
    /// use basiks::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("Hello, world!");
    /// assert_eq!(left.fold(|s| s.len() as i32, |n| n * 2), 13);
    /// ```
    pub fn fold<R>(self, left_fn: impl FnOnce(A) -> R, right_fn: impl FnOnce(B) -> R) -> R {
        match self {
            Either::Left(a) => left_fn(a),
            Either::Right(b) => right_fn(b),
        }
    }

    pub fn map_left<A2>(self, transform: impl FnOnce(A) -> A2) -> Either<A2, B> {
        match self {
            Either::Left(a) => Either::Left(transform(a)),
            Either::Right(b) => Either::Right(b),
        }
    }

    pub fn map_right<B2>(self, transform: impl FnOnce(B) -> B2) -> Either<A, B2> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(transform(b)),
        }
    }

    pub fn flat_map_left<A2>(self, transform: impl FnOnce(A) -> Either<A2, B>) -> Either<A2, B> {
        match self {
            Either::Left(a) => transform(a),
            Either::Right(b) => Either::Right(b),
        }
    }

    pub fn flat_map_right<B2>(self, transform: impl FnOnce(B) -> Either<A, B2>) -> Either<A, B2> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => transform(b),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(self) -> Option<A> {
        match self {
            Either::Left(a) => Some(a),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<B> {
        match self {
            Either::Left(_) => None,
            Either::Right(b) => Some(b),
        }
    }

    /// Keeps the `Right` value, discarding a `Left`.
    pub fn into_option(self) -> Option<B> {
        self.right()
    }
}

impl<T, E> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error),
        }
    }
}

impl<T> From<Option<T>> for Either<(), T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Either::Right(value),
            None => Either::Left(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn left() -> Either<&'static str, i32> {
        Either::Left("Hello, world!")
    }

    fn right() -> Either<&'static str, i32> {
        Either::Right(123)
    }

    #[test]
    fn test_map_left() {
        assert_eq!(left().map_left(str::len), Either::Left(13));
        assert_eq!(right().map_left(str::len), Either::Right(123));
    }

    #[test]
    fn test_map_right() {
        assert_eq!(left().map_right(|n| n * 2), Either::Left("Hello, world!"));
        assert_eq!(right().map_right(|n| n * 2), Either::Right(246));
    }

    #[test]
    fn test_flat_map_left() {
        assert_eq!(
            left().flat_map_left(|s| Either::Left(s.len())),
            Either::Left(13)
        );
        assert_eq!(
            right().flat_map_left(|s| Either::Left(s.len())),
            Either::Right(123)
        );
    }

    #[test]
    fn test_flat_map_right() {
        assert_eq!(
            left().flat_map_right(|n| Either::Right(n * 2)),
            Either::Left("Hello, world!")
        );
        assert_eq!(
            right().flat_map_right(|n| Either::<&str, i32>::Left("gone").map_right(|m: i32| m + n)),
            Either::Left("gone")
        );
    }

    #[test]
    fn test_fold() {
        let fold = |e: Either<&str, i32>| e.fold(|s| s.len() as i32, |n| n * 2);
        assert_eq!(fold(left()), 13);
        assert_eq!(fold(right()), 246);
    }

    #[test]
    fn test_right_biased_conversions() {
        assert_eq!(left().into_option(), None);
        assert_eq!(right().into_option(), Some(123));
        assert_eq!(left().left(), Some("Hello, world!"));
        assert!(right().is_right());
        assert!(!right().is_left());

        let ok: Result<i32, String> = Ok(1);
        let err: Result<i32, String> = Err("boom".to_string());
        assert_eq!(Either::from(ok), Either::Right(1));
        assert_eq!(Either::from(err), Either::Left("boom".to_string()));

        assert_eq!(Either::from(Some(5)), Either::Right(5));
        assert_eq!(Either::<(), i32>::from(None), Either::Left(()));
    }
}
