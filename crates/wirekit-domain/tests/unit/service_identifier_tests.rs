//! Unit tests for service identifiers

use std::collections::HashSet;

use wirekit_domain::{ServiceIdentifier, Symbol};

struct Shuriken;
struct Katana;

#[test]
fn test_name_identifiers_compare_by_value() {
    assert_eq!(ServiceIdentifier::from("Weapon"), ServiceIdentifier::name("Weapon"));
    assert_ne!(ServiceIdentifier::from("Weapon"), ServiceIdentifier::from("Katana"));
}

#[test]
fn test_symbols_compare_by_identity() {
    let first = Symbol::new("Weapon");
    let second = Symbol::new("Weapon");

    assert_ne!(ServiceIdentifier::from(first.clone()), ServiceIdentifier::from(second));
    assert_eq!(ServiceIdentifier::from(first.clone()), ServiceIdentifier::from(first));
}

#[test]
fn test_type_tokens_compare_by_type() {
    assert_eq!(ServiceIdentifier::of::<Katana>(), ServiceIdentifier::of::<Katana>());
    assert_ne!(ServiceIdentifier::of::<Katana>(), ServiceIdentifier::of::<Shuriken>());
}

#[test]
fn test_display_names() {
    assert_eq!(ServiceIdentifier::from("Weapon").to_string(), "Weapon");
    assert_eq!(ServiceIdentifier::symbol("Weapon").to_string(), "Symbol(Weapon)");
    assert_eq!(ServiceIdentifier::of::<Katana>().to_string(), "Katana");
}

#[test]
fn test_hash_set_membership() {
    let symbol = ServiceIdentifier::symbol("Weapon");
    let mut set = HashSet::new();
    set.insert(ServiceIdentifier::from("Weapon"));
    set.insert(symbol.clone());
    set.insert(ServiceIdentifier::of::<Katana>());

    assert!(set.contains(&ServiceIdentifier::from("Weapon")));
    assert!(set.contains(&symbol));
    assert!(!set.contains(&ServiceIdentifier::symbol("Weapon")));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_validity() {
    assert!(ServiceIdentifier::from("Weapon").is_valid());
    assert!(!ServiceIdentifier::from("").is_valid());
    assert!(!ServiceIdentifier::from("   ").is_valid());
    assert!(ServiceIdentifier::symbol("").is_valid());
}

#[test]
fn test_serde_uses_display_name() {
    let json = serde_json::to_string(&ServiceIdentifier::from("Weapon")).unwrap();
    assert_eq!(json, "\"Weapon\"");

    let parsed: ServiceIdentifier = serde_json::from_str("\"Katana\"").unwrap();
    assert_eq!(parsed, ServiceIdentifier::from("Katana"));
}
