//! End-to-end lifetime scenario over `{int, owned text}` with instrumented
//! alternatives.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::cell::Cell;
use std::rc::Rc;

use alt_variant::{Variant, VariantError, Visitor};
use pretty_assertions::assert_eq;

#[derive(Debug, Default)]
struct Log {
    constructed: Cell<usize>,
    dropped: Cell<usize>,
}

impl Log {
    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }
}

#[derive(Debug)]
struct Int {
    value: i64,
    log: Rc<Log>,
}

impl Int {
    fn new(value: i64, log: &Rc<Log>) -> Self {
        Log::bump(&log.constructed);
        Int {
            value,
            log: Rc::clone(log),
        }
    }
}

impl Drop for Int {
    fn drop(&mut self) {
        Log::bump(&self.log.dropped);
    }
}

#[derive(Debug)]
struct OwnedText {
    text: String,
    log: Rc<Log>,
}

impl OwnedText {
    fn new(text: &str, log: &Rc<Log>) -> Self {
        Log::bump(&log.constructed);
        OwnedText {
            text: text.to_owned(),
            log: Rc::clone(log),
        }
    }
}

impl Drop for OwnedText {
    fn drop(&mut self) {
        Log::bump(&self.log.dropped);
    }
}

type Value = (Int, OwnedText);

#[test]
fn int_then_text_then_int() {
    let ints = Rc::new(Log::default());
    let texts = Rc::new(Log::default());

    let mut v = Variant::<Value>::from_value(Int::new(42, &ints));
    assert!(v.is::<Int, _>());
    assert_eq!(v.get::<Int, _>().unwrap().value, 42);

    v.set(OwnedText::new("hi", &texts));
    assert!(v.is::<OwnedText, _>());
    assert!(!v.is::<Int, _>());
    assert_eq!(v.get::<OwnedText, _>().unwrap().text, "hi");
    assert_eq!(ints.dropped.get(), 1);

    let ints_before = ints.constructed.get();
    v.set(Int::new(7, &ints));
    assert_eq!(texts.dropped.get(), 1);
    assert_eq!(ints.constructed.get() - ints_before, 1);
    assert_eq!(v.get::<Int, _>().unwrap().value, 7);

    drop(v);
    assert_eq!(ints.dropped.get(), ints.constructed.get());
    assert_eq!(texts.dropped.get(), texts.constructed.get());
}

#[test]
fn visit_covers_both_alternatives() {
    let log = Rc::new(Log::default());
    let render = Visitor::<Value, String>::builder()
        .on(|n: &Int| n.value.to_string())
        .on(|t: &OwnedText| t.text.clone())
        .build()
        .expect("both alternatives handled");

    let mut v = Variant::<Value>::from_value(Int::new(3, &log));
    assert_eq!(render.visit(&v).unwrap(), "3");

    v.set(OwnedText::new("three", &log));
    assert_eq!(render.visit(&v).unwrap(), "three");

    v.clear();
    assert!(matches!(
        render.visit(&v),
        Err(VariantError::EmptyVariantAccess { expected: None })
    ));
}

#[test]
fn guarded_access_never_fails() {
    let log = Rc::new(Log::default());
    let v = Variant::<Value>::from_value(OwnedText::new("guarded", &log));
    let text = if v.is::<OwnedText, _>() {
        v.get::<OwnedText, _>().map(|t| t.text.as_str())
    } else {
        Ok("")
    };
    assert_eq!(text.unwrap(), "guarded");
    assert!(v.get::<Int, _>().unwrap_err().is_type_mismatch());
}
