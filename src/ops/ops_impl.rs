// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Applies one op to the working store and records what it touched.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_op(
    store: &mut GraphStore,
    op: &GraphOp,
    delta: &mut DeltaBuilder,
) -> Result<(), StoreError> {
    match op {
        GraphOp::AddNode { node_id, label, position } => {
            store.add_node(node_id.clone(), label.clone(), *position)?;
            delta.record_added(ObjectRef::Node(node_id.clone()));
            Ok(())
        }
        GraphOp::MoveNode { node_id, position } => {
            if store.move_node(node_id, *position) {
                delta.record_updated(ObjectRef::Node(node_id.clone()));
            }
            Ok(())
        }
        GraphOp::DeleteNode { node_id } => {
            let Some(removal) = store.delete_node(node_id) else {
                return Ok(());
            };
            for edge in removal.edges {
                delta.record_removed(ObjectRef::Edge(edge.id().clone()));
            }
            delta.record_removed(ObjectRef::Node(node_id.clone()));
            Ok(())
        }
        GraphOp::AddEdge { source, target } => {
            let edge_id = store.add_edge(source, target)?;
            delta.record_added(ObjectRef::Edge(edge_id));
            Ok(())
        }
        GraphOp::RemoveEdge { edge_id } => {
            if store.remove_edge(edge_id).is_some() {
                delta.record_removed(ObjectRef::Edge(edge_id.clone()));
            }
            Ok(())
        }
        GraphOp::Select { node_id } => {
            store.select(node_id);
            Ok(())
        }
        GraphOp::Deselect { node_id } => {
            store.deselect(node_id);
            Ok(())
        }
        GraphOp::ClearSelection => {
            store.clear_selection();
            Ok(())
        }
    }
}
