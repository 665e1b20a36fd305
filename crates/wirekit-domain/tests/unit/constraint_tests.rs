//! Unit tests for constraint evaluation

use std::sync::Arc;

use serde_json::json;
use wirekit_domain::{Binding, Constraint, RequestTree, RequestView, Target, TypeMatcher};

/// Samurai (named "hero") -> Weapon slot
fn samurai_tree() -> RequestTree {
    let samurai = Arc::new(Binding::instance("Warrior", "Samurai"));
    RequestTree::new(
        "Warrior".into(),
        vec![samurai],
        Target::root("Warrior").with_named("hero").with_tag("rank", 1),
    )
}

fn check(constraint: &Constraint, tree: &RequestTree, target: &Target) -> bool {
    let candidate = Arc::new(Binding::instance("Weapon", "Katana"));
    let view = RequestView::candidate(Some((tree, tree.root_id())), &candidate, target);
    constraint.evaluate(&view)
}

#[test]
fn test_always() {
    let tree = samurai_tree();
    assert!(check(&Constraint::Always, &tree, &Target::root("Weapon")));
}

#[test]
fn test_target_named_and_tagged() {
    let tree = samurai_tree();
    let named = Target::root("Weapon").with_named("strong");
    let tagged = Target::root("Weapon").with_tag("canThrow", true);

    let by_name = Constraint::TargetNamed {
        name: "strong".into(),
    };
    assert!(check(&by_name, &tree, &named));
    assert!(!check(&by_name, &tree, &tagged));

    let by_tag = Constraint::TargetTagged {
        key: "canThrow".into(),
        value: json!(true),
    };
    assert!(check(&by_tag, &tree, &tagged));
    assert!(!check(&by_tag, &tree, &named));
}

#[test]
fn test_injected_into() {
    let tree = samurai_tree();
    let target = Target::root("Weapon");

    let by_service = Constraint::InjectedInto {
        parent: TypeMatcher::service("Warrior"),
    };
    let by_class = Constraint::InjectedInto {
        parent: TypeMatcher::implementation("Samurai"),
    };
    let other = Constraint::InjectedInto {
        parent: TypeMatcher::implementation("Ninja"),
    };

    assert!(check(&by_service, &tree, &target));
    assert!(check(&by_class, &tree, &target));
    assert!(!check(&other, &tree, &target));
}

#[test]
fn test_injected_into_fails_without_parent() {
    let binding = Arc::new(Binding::instance("Weapon", "Katana"));
    let target = Target::root("Weapon");
    let view = RequestView::candidate(None, &binding, &target);

    let constraint = Constraint::InjectedInto {
        parent: TypeMatcher::service("Warrior"),
    };
    assert!(!constraint.evaluate(&view));
    assert!(!Constraint::ParentNamed { name: "hero".into() }.evaluate(&view));
    assert!(
        Constraint::NoAncestorIs {
            ancestor: TypeMatcher::service("Warrior")
        }
        .evaluate(&view)
    );
}

#[test]
fn test_parent_named_and_tagged() {
    let tree = samurai_tree();
    let target = Target::root("Weapon");

    assert!(check(&Constraint::ParentNamed { name: "hero".into() }, &tree, &target));
    assert!(!check(&Constraint::ParentNamed { name: "villain".into() }, &tree, &target));
    assert!(check(
        &Constraint::ParentTagged {
            key: "rank".into(),
            value: json!(1)
        },
        &tree,
        &target
    ));
}

#[test]
fn test_ancestor_constraints_walk_the_chain() {
    // Dojo -> Warrior (Samurai) -> [candidate Weapon]
    let mut tree = RequestTree::new(
        "Dojo".into(),
        vec![Arc::new(Binding::to_self("Dojo"))],
        Target::root("Dojo").with_named("east"),
    );
    let root = tree.root_id();
    let warrior = tree.add_child_request(
        root,
        "Warrior".into(),
        vec![Arc::new(Binding::instance("Warrior", "Samurai"))],
        Target::root("Warrior"),
    );
    let candidate = Arc::new(Binding::instance("Weapon", "Katana"));
    let target = Target::root("Weapon");
    let view = RequestView::candidate(Some((&tree, warrior)), &candidate, &target);

    let dojo = TypeMatcher::implementation("Dojo");
    assert!(Constraint::AnyAncestorIs { ancestor: dojo.clone() }.evaluate(&view));
    assert!(!Constraint::NoAncestorIs { ancestor: dojo }.evaluate(&view));
    assert!(Constraint::AnyAncestorNamed { name: "east".into() }.evaluate(&view));
    assert!(Constraint::NoAncestorNamed { name: "west".into() }.evaluate(&view));
    assert!(
        Constraint::NoAncestorTagged {
            key: "rank".into(),
            value: json!(1)
        }
        .evaluate(&view)
    );

    let nested = Constraint::InjectedInto {
        parent: TypeMatcher::service("Dojo"),
    };
    // Warrior is injected into Dojo, so some ancestor matches
    assert!(
        Constraint::AnyAncestorMatches {
            constraint: Box::new(nested.clone())
        }
        .evaluate(&view)
    );
    assert!(
        !Constraint::NoAncestorMatches {
            constraint: Box::new(nested)
        }
        .evaluate(&view)
    );
}

#[test]
fn test_combinators() {
    let tree = samurai_tree();
    let target = Target::root("Weapon").with_named("strong");
    let named = Constraint::TargetNamed {
        name: "strong".into(),
    };
    let parent = Constraint::ParentNamed { name: "hero".into() };

    assert!(check(
        &Constraint::All {
            constraints: vec![named.clone(), parent.clone()]
        },
        &tree,
        &target
    ));
    assert!(!check(&named.clone().negate(), &tree, &target));
    assert!(check(
        &Constraint::Any {
            constraints: vec![named.negate(), parent]
        },
        &tree,
        &target
    ));
}

#[test]
fn test_constraint_serde() {
    let constraint: Constraint = serde_json::from_str(
        r#"{"when":"injected_into","parent":{"service":"Samurai"}}"#,
    )
    .unwrap();
    assert_eq!(
        constraint,
        Constraint::InjectedInto {
            parent: TypeMatcher::service("Samurai")
        }
    );

    let constraint: Constraint = serde_json::from_str(r#"{"when":"always"}"#).unwrap();
    assert!(constraint.is_unconstrained());
}
