//! Unit tests for the identifier multi-map

use std::sync::Arc;

use wirekit_application::Lookup;
use wirekit_domain::{Binding, Error, ServiceIdentifier};

fn id(name: &str) -> ServiceIdentifier {
    ServiceIdentifier::from(name)
}

fn binding(service: &str) -> Arc<Binding> {
    Arc::new(Binding::constant(service))
}

#[test]
fn test_add_appends_in_order() {
    let mut lookup = Lookup::new();
    let first = binding("Weapon");
    let second = binding("Weapon");
    lookup.add(id("Weapon"), Arc::clone(&first)).unwrap();
    lookup.add(id("Weapon"), Arc::clone(&second)).unwrap();

    let values = lookup.get(&id("Weapon")).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].id(), first.id());
    assert_eq!(values[1].id(), second.id());
    assert_eq!(lookup.len(), 1);
}

#[test]
fn test_get_missing_key_is_not_found() {
    let lookup: Lookup<Arc<Binding>> = Lookup::new();
    let err = lookup.get(&id("Weapon")).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(lookup.try_get(&id("Weapon")).is_none());
    assert!(!lookup.has_key(&id("Weapon")));
}

#[test]
fn test_blank_identifier_is_invalid() {
    let mut lookup = Lookup::new();
    let err = lookup.add(id(""), binding("Weapon")).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let err = lookup.get(&id("  ")).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let err = lookup.remove(&id("")).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_remove_deletes_key() {
    let mut lookup = Lookup::new();
    lookup.add(id("Weapon"), binding("Weapon")).unwrap();

    let removed = lookup.remove(&id("Weapon")).unwrap();
    assert_eq!(removed.len(), 1);
    assert!(!lookup.has_key(&id("Weapon")));

    let err = lookup.remove(&id("Weapon")).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_remove_by_module_id_drops_emptied_keys() {
    let mut lookup = Lookup::new();
    lookup
        .add(id("Weapon"), Arc::new(Binding::constant("Weapon").in_module("armory")))
        .unwrap();
    lookup
        .add(id("Weapon"), Arc::new(Binding::constant("Weapon").in_module("forge")))
        .unwrap();
    lookup
        .add(id("Shield"), Arc::new(Binding::constant("Shield").in_module("armory")))
        .unwrap();

    let removed = lookup.remove_by_module_id("armory");

    assert_eq!(removed, 2);
    assert!(!lookup.has_key(&id("Shield")));
    let weapons = lookup.get(&id("Weapon")).unwrap();
    assert_eq!(weapons.len(), 1);
    assert_eq!(weapons[0].module_id(), Some("forge"));
}

#[test]
fn test_clone_is_independent() {
    let mut original = Lookup::new();
    original.add(id("Weapon"), binding("Weapon")).unwrap();

    let mut copy = original.clone();
    copy.add(id("Weapon"), binding("Weapon")).unwrap();
    copy.add(id("Shield"), binding("Shield")).unwrap();

    assert_eq!(original.get(&id("Weapon")).unwrap().len(), 1);
    assert!(!original.has_key(&id("Shield")));
    assert_eq!(copy.get(&id("Weapon")).unwrap().len(), 2);
}

#[test]
fn test_symbol_keys_compare_by_identity() {
    let mut lookup = Lookup::new();
    let first = ServiceIdentifier::symbol("Weapon");
    let second = ServiceIdentifier::symbol("Weapon");
    lookup.add(first.clone(), binding("Weapon")).unwrap();

    assert!(lookup.has_key(&first));
    assert!(!lookup.has_key(&second));
}
