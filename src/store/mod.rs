// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The graph store: the single source of truth both views read and write.
//!
//! All mutations are synchronous and complete within one call, so a render never observes a
//! half-applied change (e.g. a deleted node whose edges are still present).

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::geom::PlanarPosition;
use crate::model::{Edge, EdgeId, GraphSnapshot, Node, NodeId};
use crate::selection::SelectionController;

/// Store handle shared by the view adapters for the lifetime of a session.
pub type SharedStore = Rc<RefCell<GraphStore>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEndpoint {
    Source,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Node,
    Edge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    InvalidEndpoint { endpoint: EdgeEndpoint, node_id: NodeId },
    DuplicateId { kind: ObjectKind, id: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, node_id } => {
                let endpoint = match endpoint {
                    EdgeEndpoint::Source => "source",
                    EdgeEndpoint::Target => "target",
                };
                write!(f, "edge {endpoint} references unknown node {node_id}")
            }
            Self::DuplicateId { kind, id } => {
                write!(f, "id already used in this session ({kind:?}, id={id})")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// What a successful `delete_node` took with it.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRemoval {
    pub node: Node,
    pub edges: Vec<Edge>,
    pub selection_cleared: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
    selection: SelectionController,
    // Every id ever held, live or deleted; ids are never handed out twice in a session.
    issued_node_ids: HashSet<NodeId>,
    issued_edge_ids: HashSet<EdgeId>,
    rev: u64,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed data. Seeding does not bump the revision.
    pub fn seeded(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for node in nodes {
            store.insert_node(node)?;
        }
        for edge in edges {
            store.seed_edge(Some(edge.id().clone()), edge.source(), edge.target())?;
        }
        Ok(store)
    }

    /// Inserts a seed edge without bumping the revision. A missing id is allocated the same
    /// way `add_edge` allocates one, so id-less parallel seed edges get `-2`, `-3`, ...
    pub(crate) fn seed_edge(
        &mut self,
        edge_id: Option<EdgeId>,
        source: &NodeId,
        target: &NodeId,
    ) -> Result<EdgeId, StoreError> {
        self.check_endpoints(source, target)?;
        let edge_id = match edge_id {
            Some(edge_id) => {
                self.claim_edge_id(&edge_id)?;
                edge_id
            }
            None => self.fresh_edge_id(source, target),
        };
        let edge = Edge::new(edge_id.clone(), source.clone(), target.clone());
        self.edges.insert(edge_id.clone(), edge);
        Ok(edge_id)
    }

    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub(crate) fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn selection(&self) -> Option<&NodeId> {
        self.selection.selected()
    }

    pub fn is_selected(&self, node_id: &NodeId) -> bool {
        self.selection.is_selected(node_id)
    }

    /// Copies the current state in insertion order. Never mutates.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            rev: self.rev,
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.values().cloned().collect(),
            selected: self.selection.selected().cloned(),
        }
    }

    pub fn add_node(
        &mut self,
        node_id: NodeId,
        label: impl Into<String>,
        position: PlanarPosition,
    ) -> Result<(), StoreError> {
        self.insert_node(Node::new(node_id, label, position))?;
        self.bump_rev();
        Ok(())
    }

    fn insert_node(&mut self, node: Node) -> Result<(), StoreError> {
        if !self.issued_node_ids.insert(node.id().clone()) {
            return Err(StoreError::DuplicateId {
                kind: ObjectKind::Node,
                id: node.id().to_string(),
            });
        }
        self.nodes.insert(node.id().clone(), node);
        Ok(())
    }

    /// Replaces the node's planar position. Unknown ids and non-finite positions are ignored.
    pub fn move_node(&mut self, node_id: &NodeId, position: PlanarPosition) -> bool {
        if !position.is_finite() {
            debug!(%node_id, ?position, "ignoring move to non-finite position");
            return false;
        }
        let Some(node) = self.nodes.get_mut(node_id) else {
            debug!(%node_id, "ignoring move of unknown node");
            return false;
        };
        if node.position() == position {
            return false;
        }
        node.set_position(position);
        self.bump_rev();
        true
    }

    /// Removes the node, every edge touching it, and the selection if it pointed at it.
    pub fn delete_node(&mut self, node_id: &NodeId) -> Option<NodeRemoval> {
        let Some(node) = self.nodes.shift_remove(node_id) else {
            debug!(%node_id, "ignoring delete of unknown node");
            return None;
        };

        let mut edges = Vec::new();
        self.edges.retain(|_, edge| {
            if edge.touches(node_id) {
                edges.push(edge.clone());
                false
            } else {
                true
            }
        });
        let selection_cleared = self.selection.deselect(node_id);

        self.bump_rev();
        debug!(%node_id, cascaded_edges = edges.len(), selection_cleared, "deleted node");
        Some(NodeRemoval { node, edges, selection_cleared })
    }

    /// Connects two live nodes with a freshly allocated edge id. Self-loops are allowed.
    pub fn add_edge(&mut self, source: &NodeId, target: &NodeId) -> Result<EdgeId, StoreError> {
        self.check_endpoints(source, target)?;
        let edge_id = self.fresh_edge_id(source, target);
        let edge = Edge::new(edge_id.clone(), source.clone(), target.clone());
        self.edges.insert(edge_id.clone(), edge);
        self.bump_rev();
        debug!(%edge_id, %source, %target, "added edge");
        Ok(edge_id)
    }

    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> Option<Edge> {
        let Some(edge) = self.edges.shift_remove(edge_id) else {
            debug!(%edge_id, "ignoring removal of unknown edge");
            return None;
        };
        self.bump_rev();
        Some(edge)
    }

    /// Selects a live node. Selecting an unknown id is ignored.
    pub fn select(&mut self, node_id: &NodeId) -> bool {
        if !self.nodes.contains_key(node_id) {
            debug!(%node_id, "ignoring selection of unknown node");
            return false;
        }
        let changed = self.selection.select(node_id.clone());
        if changed {
            self.bump_rev();
        }
        changed
    }

    pub fn deselect(&mut self, node_id: &NodeId) -> bool {
        let changed = self.selection.deselect(node_id);
        if changed {
            self.bump_rev();
        }
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear();
        if changed {
            self.bump_rev();
        }
        changed
    }

    fn check_endpoints(&self, source: &NodeId, target: &NodeId) -> Result<(), StoreError> {
        if !self.nodes.contains_key(source) {
            return Err(StoreError::InvalidEndpoint {
                endpoint: EdgeEndpoint::Source,
                node_id: source.clone(),
            });
        }
        if !self.nodes.contains_key(target) {
            return Err(StoreError::InvalidEndpoint {
                endpoint: EdgeEndpoint::Target,
                node_id: target.clone(),
            });
        }
        Ok(())
    }

    fn claim_edge_id(&mut self, edge_id: &EdgeId) -> Result<(), StoreError> {
        if !self.issued_edge_ids.insert(edge_id.clone()) {
            return Err(StoreError::DuplicateId { kind: ObjectKind::Edge, id: edge_id.to_string() });
        }
        Ok(())
    }

    /// `e<source>-<target>`, suffixed with `-<n>` when that id was already issued.
    fn fresh_edge_id(&mut self, source: &NodeId, target: &NodeId) -> EdgeId {
        let base = format!("e{source}-{target}");
        let mut candidate = base.clone();
        let mut suffix = 1u32;
        loop {
            if let Ok(edge_id) = EdgeId::new(candidate.as_str()) {
                if self.issued_edge_ids.insert(edge_id.clone()) {
                    return edge_id;
                }
            }
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }
    }
}

#[cfg(test)]
mod tests;
