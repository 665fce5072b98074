use core::fmt;

use crate::Nullable;

/// A value that is either present (`Some`) or absent (`None`).
///
/// The variant is fixed at construction. Every transforming operation
/// consumes `self` and hands back a new `Opt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opt<T> {
    Some(T),
    None,
}

impl<T> Opt<T> {
    /// Constructs an `Opt::Some(val)` variant, even if `val` is nil-like.
    pub fn some(val: T) -> Self {
        Opt::Some(val)
    }

    /// Constructs an `Opt::None` variant.
    pub fn none() -> Self {
        Opt::None
    }

    /// Wraps `val`, collapsing nil-like values to `Opt::None`.
    ///
    /// Non-nilable values (numbers, strings, collections, ...) always end up
    /// in `Opt::Some`, zero values included.
    pub fn of(val: T) -> Self
    where
        T: Nullable,
    {
        if val.is_nil() { Opt::None } else { Opt::Some(val) }
    }

    /// Clones the referent of a nullable reference into an `Opt`.
    pub fn from_ref(val: Option<&T>) -> Self
    where
        T: Clone,
    {
        match val {
            Some(val) => Opt::Some(val.clone()),
            None => Opt::None,
        }
    }

    /// Clones the pointee of `ptr` into an `Opt`, or `Opt::None` for null.
    ///
    /// # Safety
    /// If `ptr` is non-null it must be aligned and valid for reads of `T`.
    pub unsafe fn from_ptr(ptr: *const T) -> Self
    where
        T: Clone,
    {
        // SAFETY: upheld by the caller for non-null pointers.
        Self::from_ref(unsafe { ptr.as_ref() })
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics if the value is `Opt::None`.
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Opt::Some(val) => val,
            Opt::None => panic!("called `Opt::get()` on a `None` value"),
        }
    }

    /// Expects the value to be `Some`, panics with `msg` if not.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Opt::Some(val) => val,
            Opt::None => panic!("{}", msg),
        }
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Opt::Some(val) => val,
            Opt::None => fallback,
        }
    }

    /// Returns `self` if it holds a value, `alternative` otherwise.
    pub fn or_else(self, alternative: Opt<T>) -> Opt<T> {
        match self {
            Opt::Some(_) => self,
            Opt::None => alternative,
        }
    }

    /// Returns true if the value is `None`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Opt::None)
    }

    /// Returns true if the value is `Some`.
    pub fn is_non_empty(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    /// Maps `Opt<T>` to `Opt<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        crate::map(self, f)
    }

    /// Hands the contained value to `f` and returns whatever it produces.
    pub fn flat_map<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
        crate::flat_map(self, f)
    }

    pub fn match_with<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        crate::match_with(self, on_present, on_absent)
    }

    pub fn equal(&self, other: &Opt<T>) -> bool
    where
        T: PartialEq,
    {
        crate::equal(self, other)
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(val) => Opt::Some(val),
            Opt::None => Opt::None,
        }
    }

    /// Converts from `&mut Opt<T>` to `Opt<&mut T>`.
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Opt::Some(val) => Opt::Some(val),
            Opt::None => Opt::None,
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::None
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Opt::Some(val),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Some(val) => Some(val),
            Opt::None => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opt::Some(val) => write!(f, "Some({})", val),
            Opt::None => f.write_str("None"),
        }
    }
}

/// Shorthand for [`Opt::none`].
pub fn none<T>() -> Opt<T> {
    Opt::None
}

/// Shorthand for [`Opt::some`].
pub fn some<T>(val: T) -> Opt<T> {
    Opt::Some(val)
}

/// Shorthand for [`Opt::of`].
pub fn of<T: Nullable>(val: T) -> Opt<T> {
    Opt::of(val)
}
