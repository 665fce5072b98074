//! Free-standing combinators over [`Opt`].
//!
//! These are functions rather than methods so the wrapped type can change
//! from input to output. `Opt` exposes method forms that forward here.

use crate::Opt;

/// Applies `mapper` to a present value and wraps the result.
///
/// `mapper` is never called for `Opt::None`.
pub fn map<T1, T2, F>(opt: Opt<T1>, mapper: F) -> Opt<T2>
where
    F: FnOnce(T1) -> T2,
{
    match opt {
        Opt::Some(val) => Opt::Some(mapper(val)),
        Opt::None => Opt::None,
    }
}

/// Applies `mapper` to a present value and returns its result as-is.
///
/// Only the single layer produced by `mapper` is kept; nested `Opt`s inside
/// its result are not flattened further.
pub fn flat_map<T1, T2, F>(opt: Opt<T1>, mapper: F) -> Opt<T2>
where
    F: FnOnce(T1) -> Opt<T2>,
{
    match opt {
        Opt::Some(val) => mapper(val),
        Opt::None => Opt::None,
    }
}

/// Calls exactly one of `on_present` or `on_absent`.
pub fn match_with<T1, T2, P, A>(opt: Opt<T1>, on_present: P, on_absent: A) -> T2
where
    P: FnOnce(T1) -> T2,
    A: FnOnce() -> T2,
{
    match opt {
        Opt::Some(val) => on_present(val),
        Opt::None => on_absent(),
    }
}

/// Structural equality: both absent, or both present with equal values.
pub fn equal<T: PartialEq>(x: &Opt<T>, y: &Opt<T>) -> bool {
    match (x, y) {
        (Opt::Some(a), Opt::Some(b)) => a == b,
        (Opt::None, Opt::None) => true,
        _ => false,
    }
}
