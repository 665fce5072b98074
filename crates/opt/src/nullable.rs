use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ptr::NonNull;

use crate::Opt;

/// Types whose values can denote "points to nothing".
///
/// [`Opt::of`] uses this to collapse nil-like values into `Opt::None`.
/// Null raw pointers and `Option::None` are nil; every other impl in this
/// module is a value type that never is.
pub trait Nullable {
    fn is_nil(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T> Nullable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

// A nested `Opt` is an ordinary value, `Opt::None` included.
impl<T> Nullable for Opt<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

macro_rules! never_nil {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Nullable for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_nil!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    str, String,
);

macro_rules! never_nil_generic {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T> Nullable for $ty<T> {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_nil_generic!(Vec, VecDeque, BTreeSet);

impl<T: ?Sized> Nullable for Box<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for Rc<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for Arc<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for &T {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for &mut T {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nullable for [T] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V> Nullable for BTreeMap<K, V> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<B: ?Sized + alloc::borrow::ToOwned> Nullable for Cow<'_, B> {
    fn is_nil(&self) -> bool {
        false
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Nullable for std::collections::HashMap<K, V, S> {
    fn is_nil(&self) -> bool {
        false
    }
}

#[cfg(feature = "std")]
impl<T, S> Nullable for std::collections::HashSet<T, S> {
    fn is_nil(&self) -> bool {
        false
    }
}

macro_rules! never_nil_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Nullable for ($($name,)+) {
            fn is_nil(&self) -> bool {
                false
            }
        }
    };
}

never_nil_tuple!(A);
never_nil_tuple!(A, B);
never_nil_tuple!(A, B, C);
never_nil_tuple!(A, B, C, D);
