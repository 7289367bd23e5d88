// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::ids::{EdgeId, NodeId};
use crate::geom::PlanarPosition;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: NodeId,
    label: String,
    position: PlanarPosition,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>, position: PlanarPosition) -> Self {
        Self { id, label: label.into(), position }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> PlanarPosition {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: PlanarPosition) {
        self.position = position;
    }
}

/// A directed connection `source -> target`. Edges carry no attributes beyond connectivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Read-only copy of the graph state handed to render paths.
///
/// Nodes and edges are in insertion order; the order is only meaningful for deterministic
/// iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub rev: u64,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub selected: Option<NodeId>,
}

impl GraphSnapshot {
    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id() == edge_id)
    }
}
