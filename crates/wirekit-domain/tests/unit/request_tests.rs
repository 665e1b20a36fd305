//! Unit tests for the request tree and contexts

use std::sync::Arc;

use wirekit_domain::ports::BindingSource;
use wirekit_domain::{
    Binding, Context, Plan, RequestTree, RequestView, ServiceIdentifier, Target,
};

struct EmptySource;

impl BindingSource for EmptySource {
    fn local_bindings(&self, _: &ServiceIdentifier) -> Option<Vec<Arc<Binding>>> {
        None
    }

    fn parent(&self) -> Option<Arc<dyn BindingSource>> {
        None
    }
}

fn ninja_tree() -> RequestTree {
    let ninja = Arc::new(Binding::to_self("Ninja"));
    RequestTree::new("Ninja".into(), vec![ninja], Target::root("Ninja"))
}

#[test]
fn test_root_request() {
    let tree = ninja_tree();
    let root = tree.root();

    assert_eq!(tree.len(), 1);
    assert_eq!(root.id(), tree.root_id());
    assert!(root.parent().is_none());
    assert!(root.children().is_empty());
    assert_eq!(root.bindings().len(), 1);
}

#[test]
fn test_add_child_request_links_both_ways() {
    let mut tree = ninja_tree();
    let katana = Arc::new(Binding::to_self("Katana"));
    let root = tree.root_id();

    let child = tree.add_child_request(
        root,
        "Katana".into(),
        vec![katana],
        Target::new(Some("katana"), "Katana"),
    );

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.root().children(), &[child]);
    assert_eq!(tree.get(child).parent(), Some(root));
    assert_eq!(tree.depth(child), 1);
    assert_ne!(tree.get(child).guid(), tree.root().guid());
}

#[test]
fn test_ancestors_nearest_first() {
    let mut tree = ninja_tree();
    let root = tree.root_id();
    let weapon = tree.add_child_request(
        root,
        "Weapon".into(),
        vec![Arc::new(Binding::to_self("Weapon"))],
        Target::root("Weapon"),
    );
    let blade = tree.add_child_request(
        weapon,
        "Blade".into(),
        vec![Arc::new(Binding::to_self("Blade"))],
        Target::root("Blade"),
    );

    let names: Vec<String> = tree
        .ancestors(blade)
        .map(|r| r.service_identifier().to_string())
        .collect();
    assert_eq!(names, vec!["Weapon", "Ninja"]);

    let view_names: Vec<String> = RequestView::of(&tree, blade)
        .unwrap()
        .ancestors()
        .map(|r| r.service_identifier().to_string())
        .collect();
    assert_eq!(view_names, names);
}

#[test]
fn test_candidate_view_sits_under_parent() {
    let tree = ninja_tree();
    let katana = Arc::new(Binding::instance("Weapon", "Katana"));
    let target = Target::root("Weapon");

    let view = RequestView::candidate(Some((&tree, tree.root_id())), &katana, &target);

    assert_eq!(view.service_identifier(), &ServiceIdentifier::from("Weapon"));
    assert_eq!(view.bindings().len(), 1);
    let parent = view.parent().unwrap();
    assert_eq!(parent.service_identifier(), &ServiceIdentifier::from("Ninja"));
    assert!(parent.parent().is_none());
}

#[test]
fn test_ids_from_another_tree_are_rejected() {
    let mut tree = ninja_tree();
    let mut other = ninja_tree();
    let root = tree.root_id();
    let foreign = other.add_child_request(
        other.root_id(),
        "Weapon".into(),
        vec![Arc::new(Binding::to_self("Weapon"))],
        Target::root("Weapon"),
    );
    tree.add_child_request(
        root,
        "Shield".into(),
        vec![Arc::new(Binding::to_self("Shield"))],
        Target::root("Shield"),
    );

    assert!(!tree.contains(foreign));
    assert!(!tree.contains(other.root_id()));
    assert!(tree.contains(root));
    assert!(tree.try_get(foreign).is_none());
    assert!(RequestView::of(&tree, foreign).is_none());
    assert_eq!(tree.ancestors(foreign).count(), 0);

    let katana = Arc::new(Binding::instance("Weapon", "Katana"));
    let target = Target::root("Weapon");
    let view = RequestView::candidate(Some((&tree, foreign)), &katana, &target);
    assert!(view.parent().is_none());
}

#[test]
#[should_panic(expected = "belongs to another tree")]
fn test_get_panics_on_foreign_id() {
    let tree = ninja_tree();
    let other = ninja_tree();
    let _ = tree.get(other.root_id());
}

#[test]
fn test_context_owns_plan() {
    let source = EmptySource;
    let mut context = Context::new(&source);
    assert!(context.plan().is_none());

    let plan = context.add_plan(Plan::new(context.id(), ninja_tree()));
    assert_eq!(plan.len(), 1);
    assert_eq!(
        plan.root_request().service_identifier(),
        &ServiceIdentifier::from("Ninja")
    );

    let context_id = context.id();
    let plan = context.into_plan().unwrap();
    assert_eq!(plan.context_id(), context_id);
}
