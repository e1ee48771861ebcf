#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

enumerated! {
    /// Fixture enum for the trait tests.
    pub enum Fruit {
        Apple => "apple",
        Pear => "pear",
        Quince => "quince",
    }
}

// === Listing ===

#[test]
fn values_are_in_declaration_order() {
    assert_eq!(Fruit::values(), &[Fruit::Apple, Fruit::Pear, Fruit::Quince]);
}

#[test]
fn first_is_the_first_declared_variant() {
    assert_eq!(Fruit::first(), Some(Fruit::Apple));
}

// === Names ===

#[test]
fn name_and_display_agree() {
    assert_eq!(Fruit::Pear.name(), "pear");
    assert_eq!(Fruit::Pear.to_string(), "pear");
}

// === Parsing ===

#[test]
fn lookup_finds_every_variant() {
    for variant in Fruit::values() {
        assert_eq!(Fruit::lookup(variant.name()), Some(*variant));
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(Fruit::lookup("Apple"), None);
}

#[test]
fn parse_reports_the_rejected_name() {
    let err = Fruit::parse("mango").unwrap_err();
    assert_eq!(err.name, "mango");
    assert_eq!(err.type_name, "Fruit");
    assert_eq!(err.to_string(), "unknown Fruit variant `mango`");
}

#[test]
fn parse_round_trips_every_variant() {
    for variant in Fruit::values() {
        assert_eq!(Fruit::parse(variant.name()), Ok(*variant));
    }
}
