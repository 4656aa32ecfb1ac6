//! Integration tests for scene construction and node handles.

use shadebind::prelude::*;

fn build_office() -> (Scene, NodeId, NodeId) {
    let mut g = SceneGraph::new("office_set");
    let root = g.root_id();
    let set = g.add_group(root, "Office_set").expect("add Office_set");
    let desk = g.add_group(set, "Desk_Assembly").expect("add Desk_Assembly");
    let cup = g.add_group(desk, "Cup_grp").expect("add Cup_grp");
    let mats = g.add_group(set, "Materials").expect("add Materials");
    g.add_material(mats, "Default").expect("add Default");
    (Scene::from(g), desk, cup)
}

#[test]
fn handles_navigate_the_hierarchy() {
    let (scene, desk, cup) = build_office();

    let root = scene.root();
    assert!(root.is_pseudo_root());
    assert_eq!(root.num_children(), 1);

    let cup_node = scene.node(cup);
    assert!(cup_node.valid());
    assert_eq!(cup_node.name(), "Cup_grp");
    assert_eq!(
        cup_node.path().as_str(),
        "/Office_set/Desk_Assembly/Cup_grp"
    );

    let parent = cup_node.parent().expect("cup has a parent");
    assert_eq!(parent.id(), desk);

    let found = scene
        .find("/Office_set/Desk_Assembly/Cup_grp")
        .expect("find by path");
    assert_eq!(found.id(), cup);

    let material = scene
        .find("/Office_set/Materials/Default")
        .expect("find material");
    assert!(material.is_material());
    assert!(!cup_node.is_material());
}

#[test]
fn bindings_are_visible_on_handles() {
    let mut g = SceneGraph::new("bindings");
    let root = g.root_id();
    let a = g.add_group(root, "A").expect("add A");
    g.bind_direct(
        a,
        Purpose::Full,
        BindingStrength::StrongerThanDescendants,
        "/Materials/X",
    )
    .expect("bind direct");
    g.bind_collection(
        a,
        Purpose::AllPurpose,
        BindingStrength::WeakerThanDescendants,
        "Set",
        "/Materials/Y",
    )
    .expect("bind collection");
    let scene = Scene::from(g);

    let node = scene.find("/A").expect("find A");
    let direct = node.direct_binding(Purpose::Full).expect("full binding");
    assert_eq!(direct.kind(), BindingKind::Direct);
    assert_eq!(direct.strength, BindingStrength::StrongerThanDescendants);
    assert_eq!(direct.target.as_str(), "/Materials/X");
    assert!(node.direct_binding(Purpose::Preview).is_none());

    let bindings = node.collection_bindings();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].collection, "Set");
    assert_eq!(bindings[0].purpose, Purpose::AllPurpose);
}

#[test]
fn removal_invalidates_stale_handles() {
    let mut g = SceneGraph::new("lifecycle");
    let root = g.root_id();
    let set = g.add_group(root, "Office_set").expect("add Office_set");
    let desk = g.add_group(set, "Desk_Assembly").expect("add Desk_Assembly");
    let cup = g.add_group(desk, "Cup_grp").expect("add Cup_grp");

    g.remove_subtree(desk).expect("remove Desk_Assembly");
    let scene = Scene::from(g);

    assert!(scene.find("/Office_set/Desk_Assembly").is_none());
    assert!(scene.find("/Office_set/Desk_Assembly/Cup_grp").is_none());

    let stale = scene.node(cup);
    assert!(!stale.valid());
    // Stale handles still report the path they had, for diagnostics.
    assert_eq!(
        stale.path().as_str(),
        "/Office_set/Desk_Assembly/Cup_grp"
    );

    let set_node = scene.find("/Office_set").expect("set survives");
    assert_eq!(set_node.num_children(), 0);
}
