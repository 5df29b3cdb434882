use leptos_navtree::{Badge, ClickOutcome, MenuItem, NavRow, NavTree, NavTreeError, RenderOptions};

fn visible_ids(tree: &NavTree, state: &leptos_navtree::NavState, options: &RenderOptions) -> Vec<String> {
    tree.rows(state, options)
        .into_iter()
        .filter_map(|row| match row {
            NavRow::Item(row) => Some(row.item.id),
            NavRow::Divider { .. } => None,
        })
        .collect()
}

#[test]
fn click_sequence_on_two_level_tree() {
    let tree = NavTree::new(vec![
        MenuItem::new("a", "A").with_children(vec![MenuItem::new("a1", "A1")]),
        MenuItem::new("b", "B"),
    ])
    .unwrap();
    let mut state = tree.initial_state(None);
    let mut clicked: Vec<String> = Vec::new();

    let mut click = |state: &mut leptos_navtree::NavState, item: &MenuItem| {
        let outcome = state.click(item, false);
        if outcome.notifies() {
            clicked.push(item.id.clone());
        }
        outcome
    };

    let a = tree.items()[0].clone();
    assert_eq!(click(&mut state, &a), ClickOutcome::Toggled { expanded: true });
    assert!(state.is_expanded("a"));
    assert_eq!(state.expanded().len(), 1);
    assert_eq!(state.active_id(), Some("a"));

    let a1 = a.children[0].clone();
    assert_eq!(click(&mut state, &a1), ClickOutcome::Activated);
    assert_eq!(state.active_id(), Some("a1"));
    assert!(state.is_expanded("a"));
    assert_eq!(state.expanded().len(), 1);

    assert_eq!(click(&mut state, &a), ClickOutcome::Toggled { expanded: false });
    assert!(state.expanded().is_empty());
    assert_eq!(state.active_id(), Some("a"));

    assert_eq!(clicked, vec!["a", "a1", "a"]);
}

#[test]
fn collapsed_mode_hides_expanded_children() {
    let tree = NavTree::new(vec![
        MenuItem::new("a", "A").with_children(vec![MenuItem::new("a1", "A1")]),
        MenuItem::new("b", "B"),
    ])
    .unwrap();
    let mut state = tree.initial_state(None);
    state.click(&tree.items()[0], false);

    let open = RenderOptions { collapsed: false, show_dividers: false };
    let mini = RenderOptions { collapsed: true, show_dividers: false };

    assert_eq!(visible_ids(&tree, &state, &open), vec!["a", "a1", "b"]);
    assert_eq!(visible_ids(&tree, &state, &mini), vec!["a", "b"]);
    assert!(state.is_expanded("a"));
}

#[test]
fn duplicate_ids_fail_construction() {
    let result = NavTree::new(vec![MenuItem::new("x", "One"), MenuItem::new("x", "Two")]);
    match result {
        Err(NavTreeError::DuplicateId { id }) => assert_eq!(id, "x"),
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[test]
fn menu_loads_from_json() {
    let json = r#"[
        { "id": "dashboard", "label": "Dashboard", "icon": "▦", "active": true },
        { "id": "users", "label": "Users", "badge": 3, "children": [
            { "id": "customers", "label": "Customers", "badge": "New" }
        ]},
        { "id": "docs", "label": "Docs", "href": "/docs" },
        { "id": "analytics", "label": "Analytics", "disabled": true }
    ]"#;
    let items: Vec<MenuItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items[1].badge, Some(Badge::Count(3)));
    assert_eq!(items[1].children[0].badge, Some(Badge::Text("New".into())));
    assert!(items[2].is_link_leaf());
    assert!(items[3].disabled);

    let tree = NavTree::new(items).unwrap();
    let mut state = tree.initial_state(None);
    assert_eq!(state.active_id(), Some("dashboard"));

    assert_eq!(state.click(&tree.items()[2], false), ClickOutcome::Navigated);
    assert_eq!(state.click(&tree.items()[3], false), ClickOutcome::Suppressed);
    assert_eq!(state.active_id(), Some("dashboard"));
}
