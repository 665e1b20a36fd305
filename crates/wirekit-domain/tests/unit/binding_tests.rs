//! Unit tests for bindings

use wirekit_domain::{Binding, BindingKind, BindingScope, Constraint, ServiceIdentifier};

#[test]
fn test_instance_binding_defaults() {
    let binding = Binding::instance("Weapon", "Katana");

    assert_eq!(binding.service_identifier(), &ServiceIdentifier::from("Weapon"));
    assert_eq!(binding.scope(), BindingScope::Transient);
    assert!(binding.constraint().is_unconstrained());
    assert!(binding.module_id().is_none());
    assert!(binding.is_instantiable());
    assert_eq!(binding.kind().instantiable_class(), Some("Katana"));
}

#[test]
fn test_to_self() {
    let binding = Binding::to_self("Ninja");
    assert_eq!(binding.service_identifier(), &ServiceIdentifier::from("Ninja"));
    assert_eq!(binding.kind().instantiable_class(), Some("Ninja"));
}

#[test]
fn test_non_class_kinds_are_not_instantiable() {
    let bindings = [
        Binding::constant("Config"),
        Binding::dynamic_value("Clock"),
        Binding::constructor("KatanaType", "Katana"),
        Binding::factory("WeaponFactory"),
        Binding::function("Formatter"),
        Binding::auto_factory("KatanaFactory", "Katana"),
        Binding::provider("WeaponProvider"),
    ];

    for binding in &bindings {
        assert!(!binding.is_instantiable(), "{}", binding.kind().label());
        assert!(binding.kind().instantiable_class().is_none());
    }
}

#[test]
fn test_kind_labels() {
    assert_eq!(Binding::instance("A", "A").kind().label(), "instance");
    assert_eq!(Binding::auto_factory("A", "B").kind().label(), "auto-factory");
    assert_eq!(Binding::provider("A").kind().label(), "provider");
}

#[test]
fn test_scope_builders() {
    let binding = Binding::instance("Weapon", "Katana").in_singleton_scope();
    assert_eq!(binding.scope(), BindingScope::Singleton);
    assert_eq!(binding.scope().to_string(), "singleton");

    let binding = binding.in_transient_scope();
    assert_eq!(binding.scope(), BindingScope::Transient);
}

#[test]
fn test_constraint_builders() {
    let binding = Binding::instance("Weapon", "Katana").when_target_named("strong");
    assert_eq!(
        binding.constraint(),
        &Constraint::TargetNamed {
            name: "strong".to_string()
        }
    );
}

#[test]
fn test_module_stamp() {
    let binding = Binding::constant("Config").in_module("settings");
    assert_eq!(binding.module_id(), Some("settings"));
}

#[test]
fn test_binding_ids_are_unique() {
    let first = Binding::instance("Weapon", "Katana");
    let second = Binding::instance("Weapon", "Katana");
    assert_ne!(first.id(), second.id());
    assert_eq!(first.clone().id(), first.id());
}

#[test]
fn test_binding_kind_serde() {
    let kind: BindingKind =
        serde_json::from_str(r#"{"type":"instance","implementation":"Katana"}"#).unwrap();
    assert_eq!(
        kind,
        BindingKind::Instance {
            implementation: "Katana".to_string()
        }
    );

    let kind: BindingKind = serde_json::from_str(r#"{"type":"constant_value"}"#).unwrap();
    assert_eq!(kind, BindingKind::ConstantValue);
}
