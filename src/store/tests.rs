// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{EdgeEndpoint, GraphStore, ObjectKind, StoreError};
use crate::geom::PlanarPosition;
use crate::model::fixtures::{demo_edges, demo_nodes};
use crate::model::{Edge, EdgeId, Node, NodeId};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

fn edge_pairs(store: &GraphStore) -> Vec<(String, String)> {
    store
        .edges()
        .map(|edge| (edge.source().to_string(), edge.target().to_string()))
        .collect()
}

fn node_ids(store: &GraphStore) -> Vec<String> {
    store.nodes().map(|node| node.id().to_string()).collect()
}

#[fixture]
fn store() -> GraphStore {
    GraphStore::seeded(demo_nodes(), demo_edges()).expect("seed store")
}

#[rstest]
fn seeding_keeps_insertion_order_and_starts_at_rev_zero(store: GraphStore) {
    assert_eq!(store.rev(), 0);
    assert_eq!(node_ids(&store), vec!["1", "2", "3"]);
    assert_eq!(
        edge_pairs(&store),
        vec![("1".to_owned(), "2".to_owned()), ("1".to_owned(), "3".to_owned())]
    );
}

#[rstest]
fn id_less_seed_edges_get_suffixed_ids(mut store: GraphStore) {
    let first = store.seed_edge(None, &nid("2"), &nid("3")).expect("seed edge");
    let second = store.seed_edge(None, &nid("2"), &nid("3")).expect("parallel seed edge");
    // Collides with the seeded `e1-2`.
    let third = store.seed_edge(None, &nid("1"), &nid("2")).expect("seed edge");

    assert_eq!(first.as_str(), "e2-3");
    assert_eq!(second.as_str(), "e2-3-2");
    assert_eq!(third.as_str(), "e1-2-2");
    assert_eq!(store.edge_count(), 5);
    assert_eq!(store.rev(), 0);
}

#[rstest]
fn seeding_rejects_edges_with_unknown_endpoints() {
    let edges = vec![Edge::new(eid("e1-9"), nid("1"), nid("9"))];
    let result = GraphStore::seeded(demo_nodes(), edges);
    assert_eq!(
        result.err(),
        Some(StoreError::InvalidEndpoint { endpoint: EdgeEndpoint::Target, node_id: nid("9") })
    );
}

#[rstest]
fn delete_node_cascades_to_incident_edges(mut store: GraphStore) {
    let removal = store.delete_node(&nid("1")).expect("node 1 exists");

    assert_eq!(removal.node.id(), &nid("1"));
    assert_eq!(removal.edges.len(), 2);
    assert_eq!(store.edge_count(), 0);
    assert_eq!(node_ids(&store), vec!["2", "3"]);
    assert_eq!(store.rev(), 1);
}

#[rstest]
fn delete_node_keeps_unrelated_edges(mut store: GraphStore) {
    store.add_edge(&nid("2"), &nid("3")).expect("connect 2 -> 3");

    store.delete_node(&nid("1")).expect("node 1 exists");

    assert_eq!(edge_pairs(&store), vec![("2".to_owned(), "3".to_owned())]);
}

#[rstest]
fn deleting_selected_node_clears_selection(mut store: GraphStore) {
    assert!(store.select(&nid("1")));

    let removal = store.delete_node(&nid("1")).expect("node 1 exists");

    assert!(removal.selection_cleared);
    assert_eq!(store.selection(), None);
}

#[rstest]
fn deleting_other_node_keeps_selection(mut store: GraphStore) {
    store.select(&nid("2"));

    let removal = store.delete_node(&nid("3")).expect("node 3 exists");

    assert!(!removal.selection_cleared);
    assert_eq!(store.selection(), Some(&nid("2")));
}

#[rstest]
fn delete_unknown_node_is_a_noop(mut store: GraphStore) {
    let before = store.snapshot();
    assert!(store.delete_node(&nid("nope")).is_none());
    assert_eq!(store.snapshot(), before);
}

#[rstest]
fn move_node_preserves_edges_and_other_positions(mut store: GraphStore) {
    let edges_before = edge_pairs(&store);

    assert!(store.move_node(&nid("1"), PlanarPosition::new(50.0, 50.0)));

    let snapshot = store.snapshot();
    assert_eq!(edge_pairs(&store), edges_before);
    assert_eq!(snapshot.node(&nid("1")).unwrap().position(), PlanarPosition::new(50.0, 50.0));
    assert_eq!(snapshot.node(&nid("2")).unwrap().position(), PlanarPosition::new(100.0, 200.0));
    assert_eq!(snapshot.node(&nid("3")).unwrap().position(), PlanarPosition::new(400.0, 200.0));
}

#[rstest]
#[case::unknown_id("nope", PlanarPosition::new(1.0, 1.0))]
#[case::non_finite("1", PlanarPosition::new(f64::NAN, 1.0))]
#[case::same_position("1", PlanarPosition::new(250.0, 50.0))]
fn move_node_ignores_noop_requests(
    mut store: GraphStore,
    #[case] node_id: &str,
    #[case] position: PlanarPosition,
) {
    let before = store.snapshot();
    assert!(!store.move_node(&nid(node_id), position));
    assert_eq!(store.snapshot(), before);
}

#[rstest]
#[case::unknown_source("nonexistent", "2", EdgeEndpoint::Source)]
#[case::unknown_target("2", "nonexistent", EdgeEndpoint::Target)]
fn add_edge_rejects_unknown_endpoints(
    mut store: GraphStore,
    #[case] source: &str,
    #[case] target: &str,
    #[case] endpoint: EdgeEndpoint,
) {
    let result = store.add_edge(&nid(source), &nid(target));

    assert_eq!(
        result,
        Err(StoreError::InvalidEndpoint { endpoint, node_id: nid("nonexistent") })
    );
    assert_eq!(store.edge_count(), 2);
    assert_eq!(store.rev(), 0);
}

#[rstest]
fn add_edge_appends_with_fresh_id(mut store: GraphStore) {
    let edge_id = store.add_edge(&nid("2"), &nid("3")).expect("connect");

    assert_eq!(edge_id, eid("e2-3"));
    let last = store.edges().last().expect("edge");
    assert_eq!(last.id(), &edge_id);
    assert_eq!(store.rev(), 1);
}

#[rstest]
fn add_edge_allows_self_loops(mut store: GraphStore) {
    let edge_id = store.add_edge(&nid("2"), &nid("2")).expect("self loop");
    assert!(store.edge(&edge_id).expect("edge").is_self_loop());
}

#[rstest]
fn edge_ids_are_never_reused(mut store: GraphStore) {
    // `e1-2` is a seeded id; removing it must not free it up.
    store.remove_edge(&eid("e1-2")).expect("seeded edge");

    let first = store.add_edge(&nid("1"), &nid("2")).expect("reconnect");
    let second = store.add_edge(&nid("1"), &nid("2")).expect("parallel edge");

    assert_eq!(first, eid("e1-2-2"));
    assert_eq!(second, eid("e1-2-3"));
}

#[rstest]
fn node_ids_are_never_reused(mut store: GraphStore) {
    store.delete_node(&nid("3")).expect("node 3 exists");

    let result = store.add_node(nid("3"), "again", PlanarPosition::default());

    assert_eq!(result, Err(StoreError::DuplicateId { kind: ObjectKind::Node, id: "3".to_owned() }));
    assert!(!store.contains_node(&nid("3")));
}

#[rstest]
fn add_node_appends_in_order(mut store: GraphStore) {
    store.add_node(nid("4"), "Node 4", PlanarPosition::new(10.0, 10.0)).expect("add node");

    assert_eq!(node_ids(&store), vec!["1", "2", "3", "4"]);
    assert_eq!(store.rev(), 1);
}

#[rstest]
fn remove_unknown_edge_is_a_noop(mut store: GraphStore) {
    assert!(store.remove_edge(&eid("missing")).is_none());
    assert_eq!(store.edge_count(), 2);
    assert_eq!(store.rev(), 0);
}

#[rstest]
fn select_ignores_unknown_nodes(mut store: GraphStore) {
    store.select(&nid("2"));
    assert!(!store.select(&nid("ghost")));
    assert_eq!(store.selection(), Some(&nid("2")));
}

#[rstest]
fn snapshot_is_idempotent(mut store: GraphStore) {
    store.select(&nid("2"));
    let rev = store.rev();

    let first = store.snapshot();
    let second = store.snapshot();

    assert_eq!(first, second);
    assert_eq!(store.rev(), rev);
}

#[rstest]
fn snapshot_reflects_every_prior_mutation(mut store: GraphStore) {
    store.move_node(&nid("2"), PlanarPosition::new(0.0, 0.0));
    store.add_node(nid("4"), "Node 4", PlanarPosition::new(5.0, 5.0)).expect("add");
    let edge_id = store.add_edge(&nid("4"), &nid("2")).expect("connect");
    store.select(&nid("4"));

    let snapshot = store.snapshot();

    assert_eq!(snapshot.rev, 4);
    assert_eq!(snapshot.node(&nid("2")).unwrap().position(), PlanarPosition::new(0.0, 0.0));
    assert!(snapshot.edge(&edge_id).is_some());
    assert_eq!(snapshot.selected, Some(nid("4")));
}

#[rstest]
fn shared_handle_sees_mutations_from_any_holder(store: GraphStore) {
    let shared = store.into_shared();
    let other = shared.clone();

    shared.borrow_mut().move_node(&nid("3"), PlanarPosition::new(1.0, 2.0));

    let node: Node = other.borrow().node(&nid("3")).cloned().expect("node 3");
    assert_eq!(node.position(), PlanarPosition::new(1.0, 2.0));
}
