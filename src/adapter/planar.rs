// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Adapter between the shared store and a 2D diagramming collaborator.
//!
//! Inbound: the collaborator reports change lists (`NodeChange`/`EdgeChange`) and connect
//! requests; each list is translated to one atomic op batch. Outbound: a `PlanarFrame` with the
//! node/edge lists the collaborator renders, rebuilt from the store on every call.

use serde::{Deserialize, Serialize};

use crate::geom::PlanarPosition;
use crate::model::{EdgeId, NodeId};
use crate::ops::{apply_ops, ApplyError, Delta, GraphOp};
use crate::store::{SharedStore, StoreError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    /// Sent for every drag frame. `position` is absent on the final "drag stopped" change.
    Position {
        id: NodeId,
        #[serde(default)]
        position: Option<PlanarPosition>,
        #[serde(default)]
        dragging: bool,
    },
    Select {
        id: NodeId,
        selected: bool,
    },
    Remove {
        id: NodeId,
    },
    /// Measured size of the rendered node. Presentational only.
    Dimensions {
        id: NodeId,
    },
    /// Any change type the shared model has no counterpart for (`add`, `replace`, ...).
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    Select { id: EdgeId, selected: bool },
    Remove { id: EdgeId },
    #[serde(other)]
    Unsupported,
}

/// Connect request; the collaborator has already matched both handles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanarNodeProps {
    pub id: NodeId,
    pub label: String,
    pub position: PlanarPosition,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanarEdgeProps {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanarFrame {
    pub rev: u64,
    pub nodes: Vec<PlanarNodeProps>,
    pub edges: Vec<PlanarEdgeProps>,
}

fn node_change_op(change: &NodeChange) -> Option<GraphOp> {
    match change {
        NodeChange::Position { id, position: Some(position), .. } => {
            Some(GraphOp::MoveNode { node_id: id.clone(), position: *position })
        }
        NodeChange::Position { position: None, .. } => None,
        NodeChange::Select { id, selected: true } => Some(GraphOp::Select { node_id: id.clone() }),
        NodeChange::Select { id, selected: false } => {
            Some(GraphOp::Deselect { node_id: id.clone() })
        }
        NodeChange::Remove { id } => Some(GraphOp::DeleteNode { node_id: id.clone() }),
        NodeChange::Dimensions { .. } | NodeChange::Unsupported => None,
    }
}

fn edge_change_op(change: &EdgeChange) -> Option<GraphOp> {
    match change {
        EdgeChange::Remove { id } => Some(GraphOp::RemoveEdge { edge_id: id.clone() }),
        // Edges have no selection state in the shared model.
        EdgeChange::Select { .. } | EdgeChange::Unsupported => None,
    }
}

#[derive(Debug, Clone)]
pub struct PlanarAdapter {
    store: SharedStore,
}

impl PlanarAdapter {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn apply_node_changes(&self, changes: &[NodeChange]) -> Result<Delta, ApplyError> {
        let ops = changes.iter().filter_map(node_change_op).collect::<Vec<_>>();
        Ok(apply_ops(&mut self.store.borrow_mut(), &ops)?.delta)
    }

    pub fn apply_edge_changes(&self, changes: &[EdgeChange]) -> Result<Delta, ApplyError> {
        let ops = changes.iter().filter_map(edge_change_op).collect::<Vec<_>>();
        Ok(apply_ops(&mut self.store.borrow_mut(), &ops)?.delta)
    }

    pub fn connect(&self, connection: &Connection) -> Result<EdgeId, StoreError> {
        self.store.borrow_mut().add_edge(&connection.source, &connection.target)
    }

    /// Click on empty canvas.
    pub fn pane_click(&self) -> bool {
        self.store.borrow_mut().clear_selection()
    }

    pub fn frame(&self) -> PlanarFrame {
        let store = self.store.borrow();
        PlanarFrame {
            rev: store.rev(),
            nodes: store
                .nodes()
                .map(|node| PlanarNodeProps {
                    id: node.id().clone(),
                    label: node.label().to_owned(),
                    position: node.position(),
                    selected: store.is_selected(node.id()),
                })
                .collect(),
            edges: store
                .edges()
                .map(|edge| PlanarEdgeProps {
                    id: edge.id().clone(),
                    source: edge.source().clone(),
                    target: edge.target().clone(),
                })
                .collect(),
        }
    }
}
