#![cfg(test)]

use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::util::alloc::DropCounter;

#[test]
fn test_empty_box() {
    let boxed: OptionalBox<u8> = OptionalBox::empty();

    assert!(!boxed.has_value());
    assert_eq!(boxed.get(), None);
    assert_eq!(boxed.value(), Err(EmptyAccess), "Checked access should fail while empty.");
    assert_eq!(boxed.value_or(7), 7, "value_or should fall back to the default.");
    assert_eq!(boxed.into_value_or(9), 9);
}

#[test]
fn test_holding_value() {
    let mut boxed = OptionalBox::new(5);

    assert!(boxed.has_value());
    assert_eq!(boxed.value(), Ok(&5));
    assert_eq!(boxed.value_or(0), 5);

    *boxed.value_mut().expect("the box is present") += 1;
    assert_eq!(boxed.into_value(), Ok(6), "The held value should come back out by value.");
}

#[test]
fn test_take() {
    let mut source = OptionalBox::new(String::from("relocated"));
    let taken = source.take();

    assert!(!source.has_value(), "Taking should leave the source observably empty.");
    assert_eq!(taken.value().map(String::as_str), Ok("relocated"));

    let mut empty: OptionalBox<u8> = OptionalBox::empty();
    assert!(!empty.take().has_value(), "Taking from an empty box should produce another empty box.");
}

#[test]
fn test_emplace_and_reset() {
    let mut boxed = OptionalBox::empty();
    boxed.emplace(1);
    assert_eq!(boxed.value(), Ok(&1));

    boxed.emplace(2);
    assert_eq!(boxed.value(), Ok(&2), "Emplacing over a value should replace it.");

    boxed.reset();
    assert!(!boxed.has_value());
    boxed.reset();
    assert!(!boxed.has_value(), "Resetting an empty box should stay a no-op.");

    let counter = DropCounter::new();
    let mut boxed = OptionalBox::new(counter.clone());
    boxed.emplace(counter.clone());
    assert_eq!(counter.count(), 1, "Emplacing should drop the previous value exactly once.");
    boxed.reset();
    assert_eq!(counter.count(), 2, "Resetting should drop the current value exactly once.");
}

#[test]
fn test_emplace_with_unwind_leaves_empty() {
    let counter = DropCounter::new();
    let mut boxed = OptionalBox::new(counter.clone());

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        boxed.emplace_with(|| -> DropCounter { panic!("constructor failure") });
    }));

    assert!(result.is_err());
    assert!(
        !boxed.has_value(),
        "An unwinding constructor should leave the box empty, not holding a stale value."
    );
    assert_eq!(counter.count(), 1, "The old value should have been dropped exactly once.");
}

#[test]
fn test_swap() {
    let mut left = OptionalBox::new('a');
    let mut right = OptionalBox::new('b');
    left.swap(&mut right);
    assert_eq!(left.value(), Ok(&'b'));
    assert_eq!(right.value(), Ok(&'a'));

    let mut present = OptionalBox::new('c');
    let mut empty = OptionalBox::empty();
    present.swap(&mut empty);
    assert!(!present.has_value(), "The value should relocate out of the present box.");
    assert_eq!(empty.value(), Ok(&'c'));

    empty.swap(&mut present);
    assert_eq!(present.value(), Ok(&'c'), "The relocation should work from either receiver.");
    assert!(!empty.has_value());

    let mut nothing: OptionalBox<char> = OptionalBox::empty();
    let mut nothing_else: OptionalBox<char> = OptionalBox::empty();
    nothing.swap(&mut nothing_else);
    assert!(!nothing.has_value() && !nothing_else.has_value());
}

#[test]
fn test_equality() {
    assert!(OptionalBox::<u8>::empty() == Absent);
    assert!(Absent == OptionalBox::<u8>::empty());
    assert!(OptionalBox::new(1) != Absent);

    assert_eq!(OptionalBox::new(5), OptionalBox::new(5));
    assert_ne!(OptionalBox::new(5), OptionalBox::new(6));
    assert_ne!(OptionalBox::new(5), OptionalBox::empty());
    assert_eq!(OptionalBox::<u8>::empty(), OptionalBox::empty());
}

#[test]
fn test_ordering() {
    assert!(
        OptionalBox::empty() < OptionalBox::new(5),
        "An empty box should order before any held value."
    );
    assert!(OptionalBox::new(4) < OptionalBox::new(5));
    assert!(OptionalBox::new(5) >= OptionalBox::new(5));
    assert!(
        OptionalBox::<u8>::empty() >= OptionalBox::empty(),
        "Two empty boxes should compare equal, not less."
    );
}

#[test]
fn test_and_then() {
    let boxed = OptionalBox::new(2);
    assert_eq!(boxed.and_then(|v| v * 10), 20);

    let chained: OptionalBox<i32> = boxed.and_then(|v| OptionalBox::new(v + 1));
    assert_eq!(chained.value(), Ok(&3));

    let empty: OptionalBox<i32> = OptionalBox::empty();
    assert_eq!(empty.and_then(|v| v * 10), 0, "The empty case should produce the default.");
    let chained: OptionalBox<i32> = empty.and_then(|v| OptionalBox::new(v + 1));
    assert!(!chained.has_value());
}

#[test]
fn test_clone() {
    let counter = DropCounter::new();
    let boxed = OptionalBox::new(counter.clone());
    let cloned = boxed.clone();
    assert!(cloned.has_value(), "Cloning should mirror the presence flag.");

    drop(boxed);
    drop(cloned);
    assert_eq!(counter.count(), 2, "Each box should drop its own value exactly once.");

    let empty: OptionalBox<u8> = OptionalBox::empty();
    assert!(!empty.clone().has_value());
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let boxed = OptionalBox::new(counter.clone());
    drop(boxed);
    assert_eq!(counter.count(), 1, "Dropping a present box should run the value's destructor.");

    let counter = DropCounter::new();
    let taken = {
        let mut boxed = OptionalBox::new(counter.clone());
        boxed.take()
    };
    assert_eq!(counter.count(), 0, "A relocated value shouldn't be dropped by its old box.");
    drop(taken);
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", OptionalBox::new(5)), "OptionalBox(5)");
    assert_eq!(format!("{:?}", OptionalBox::<u8>::empty()), "OptionalBox(Absent)");
}
