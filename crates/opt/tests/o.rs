use std::collections::{BTreeMap, HashMap};

use opt::{Nullable, Opt, none, of, some};

#[test]
fn some_is_non_empty_and_get_returns_value() {
    let o = some(2);
    assert!(o.is_non_empty());
    assert!(!o.is_empty());
    assert_eq!(o.get(), 2);
}

#[test]
fn none_is_empty() {
    let o = none::<i32>();
    assert!(o.is_empty());
    assert!(!o.is_non_empty());
}

#[test]
#[should_panic(expected = "called `Opt::get()` on a `None` value")]
fn get_on_none_panics() {
    let o: Opt<i32> = Opt::none();
    o.get();
}

#[test]
#[should_panic(expected = "config value missing")]
fn expect_on_none_panics_with_message() {
    none::<String>().expect("config value missing");
}

#[test]
fn get_or_else() {
    assert_eq!(some(2).get_or_else(3), 2);
    assert_eq!(none().get_or_else(2), 2);
}

#[test]
fn or_else_keeps_present_value() {
    assert_eq!(some(3).or_else(some(2)), some(3));
    assert_eq!(some(3).or_else(none()), some(3));
}

#[test]
fn or_else_on_none_returns_alternative() {
    assert_eq!(none::<i32>().or_else(none()), none());
    assert_eq!(none().or_else(some(2)), some(2));
}

#[test]
fn display_renders_variant() {
    assert_eq!(some(2).to_string(), "Some(2)");
    assert_eq!(some("x").to_string(), "Some(x)");
    assert_eq!(none::<i32>().to_string(), "None");
    assert_eq!(some(some(1)).to_string(), "Some(Some(1))");
}

#[test]
fn default_is_none() {
    let o: Opt<Vec<u8>> = Opt::default();
    assert!(o.is_empty());
}

#[test]
fn of_collapses_nil_values() {
    let map: Option<HashMap<i32, String>> = None;
    assert!(of(map).is_empty());

    let slice: Option<Vec<u8>> = None;
    assert!(of(slice).is_empty());

    let handle: Option<fn() -> i32> = None;
    assert!(of(handle).is_empty());

    assert!(of(std::ptr::null::<u32>()).is_empty());
    assert!(of(std::ptr::null_mut::<u32>()).is_empty());
}

#[test]
fn of_keeps_empty_collections() {
    assert_eq!(of(HashMap::<i32, String>::new()), some(HashMap::new()));
    assert_eq!(of(BTreeMap::<i32, String>::new()), some(BTreeMap::new()));
    assert_eq!(of(Vec::<u8>::new()), some(Vec::new()));
    assert_eq!(of(Some(Vec::<u8>::new())), some(Some(Vec::new())));
}

#[test]
fn of_never_collapses_value_types() {
    assert_eq!(of(5), some(5));
    assert_eq!(of(0u8), some(0u8));
    assert_eq!(of(false), some(false));
    assert_eq!(of(String::new()), some(String::new()));
    assert_eq!(of(()), some(()));
}

#[test]
fn of_treats_nested_none_as_a_value() {
    let inner: Opt<i32> = none();
    assert!(!inner.is_nil());
    assert_eq!(of(inner), some(none()));
}

#[test]
fn some_force_wraps_nil_values() {
    let o = some(std::ptr::null::<u32>());
    assert!(o.is_non_empty());
    assert!(o.get().is_null());

    let explicit: Opt<Option<Vec<u8>>> = some(None);
    assert!(explicit.is_non_empty());
}

struct Handle(Option<u32>);

impl Nullable for Handle {
    fn is_nil(&self) -> bool {
        self.0.is_none()
    }
}

#[test]
fn of_uses_custom_nullable_impl() {
    assert!(of(Handle(None)).is_empty());
    assert_eq!(of(Handle(Some(7))).map(|h| h.0), some(Some(7)));
}

#[test]
fn from_ref() {
    let x = 5;
    assert_eq!(Opt::from_ref(Some(&x)), some(5));
    assert_eq!(Opt::<i32>::from_ref(None), none());
}

#[test]
fn from_ptr() {
    let x = 5;
    // SAFETY: null or pointing at a live local.
    unsafe {
        assert_eq!(Opt::<i32>::from_ptr(std::ptr::null()), none());
        assert_eq!(Opt::from_ptr(&x as *const i32), some(5));
    }
}

#[test]
fn conversions_preserve_variant() {
    let o: Opt<i32> = Some(1).into();
    assert_eq!(o, some(1));
    let back: Option<i32> = o.into();
    assert_eq!(back, Some(1));

    let o: Opt<i32> = None.into();
    assert_eq!(Option::<i32>::from(o), None);
}

#[test]
fn as_ref_and_as_mut() {
    let mut o = some(String::from("a"));
    assert_eq!(o.as_ref().map(|s| s.len()), some(1));
    if let Opt::Some(s) = o.as_mut() {
        s.push('b');
    }
    assert_eq!(o, some(String::from("ab")));
    assert!(none::<String>().as_ref().is_empty());
}
