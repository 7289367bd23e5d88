// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Adapter between the shared store and a 3D scene collaborator.
//!
//! The transform gizmo reports a 4x4 matrix per drag frame, relative to the pose it had when
//! the drag started (identity), not to the node's real position. The adapter therefore keeps a
//! per-node drag origin: the node's derived scene position at drag start. Every frame adds the
//! gizmo translation to that origin. Without it the node would jump to the gizmo's anchor on the
//! first frame.

use std::collections::HashMap;

use glam::{DMat4, DVec3};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::geom::{CoordinateMapper, ScenePosition};
use crate::model::NodeId;
use crate::route::{route_edges, RoutedEdge};
use crate::store::SharedStore;

/// A retained scene-graph object for one node, owned by the collaborator's scene.
///
/// The adapter pushes state into it; the handle never reads back from the store.
pub trait SceneNodeHandle {
    fn set_position(&mut self, position: ScenePosition);
    fn set_selected(&mut self, selected: bool);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNodeProps {
    pub id: NodeId,
    pub label: String,
    pub position: ScenePosition,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub rev: u64,
    pub nodes: Vec<SceneNodeProps>,
    pub edges: Vec<RoutedEdge>,
}

pub struct SceneAdapter {
    store: SharedStore,
    mapper: CoordinateMapper,
    drag_origins: HashMap<NodeId, ScenePosition>,
    handles: HashMap<NodeId, Box<dyn SceneNodeHandle>>,
}

impl SceneAdapter {
    pub fn new(store: SharedStore, mapper: CoordinateMapper) -> Self {
        Self { store, mapper, drag_origins: HashMap::new(), handles: HashMap::new() }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    fn scene_position(&self, node_id: &NodeId) -> Option<ScenePosition> {
        let store = self.store.borrow();
        store.node(node_id).map(|node| self.mapper.to_scene(node.position()))
    }

    pub fn is_dragging(&self, node_id: &NodeId) -> bool {
        self.drag_origins.contains_key(node_id)
    }

    pub fn drag_origin(&self, node_id: &NodeId) -> Option<ScenePosition> {
        self.drag_origins.get(node_id).copied()
    }

    /// Seeds the drag origin from the node's current derived position.
    pub fn begin_drag(&mut self, node_id: &NodeId) -> bool {
        let Some(origin) = self.scene_position(node_id) else {
            debug!(%node_id, "ignoring drag start on unknown node");
            return false;
        };
        self.drag_origins.insert(node_id.clone(), origin);
        true
    }

    /// Applies one gizmo frame. The origin is seeded lazily if `begin_drag` was never called.
    pub fn drag(&mut self, node_id: &NodeId, matrix: &DMat4) -> bool {
        if !matrix.is_finite() {
            warn!(%node_id, "dropping drag frame with non-finite transform");
            return false;
        }
        if !self.is_dragging(node_id) && !self.begin_drag(node_id) {
            return false;
        }
        let Some(origin) = self.drag_origin(node_id) else {
            return false;
        };

        let translation = matrix.w_axis.truncate();
        let scene = ScenePosition::from(DVec3::from(origin) + translation);
        let planar = self.mapper.to_planar(scene);
        trace!(%node_id, ?translation, ?planar, "scene drag frame");
        self.store.borrow_mut().move_node(node_id, planar)
    }

    pub fn end_drag(&mut self, node_id: &NodeId) -> bool {
        self.drag_origins.remove(node_id).is_some()
    }

    pub fn end_all_drags(&mut self) {
        self.drag_origins.clear();
    }

    pub fn click(&self, node_id: &NodeId) -> bool {
        self.store.borrow_mut().select(node_id)
    }

    /// Click that hit no node.
    pub fn miss(&self) -> bool {
        self.store.borrow_mut().clear_selection()
    }

    pub fn delete(&mut self, node_id: &NodeId) -> bool {
        self.drag_origins.remove(node_id);
        self.store.borrow_mut().delete_node(node_id).is_some()
    }

    pub fn attach_handle(&mut self, node_id: NodeId, handle: Box<dyn SceneNodeHandle>) {
        self.handles.insert(node_id, handle);
    }

    pub fn detach_handle(&mut self, node_id: &NodeId) -> Option<Box<dyn SceneNodeHandle>> {
        self.handles.remove(node_id)
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Pushes derived state into every attached handle and drops handles (and drag origins)
    /// of nodes that no longer exist. Returns how many handles were updated.
    pub fn sync_handles(&mut self) -> usize {
        let store = self.store.borrow();
        self.handles.retain(|node_id, _| store.contains_node(node_id));
        self.drag_origins.retain(|node_id, _| store.contains_node(node_id));

        let mut pushed = 0;
        for (node_id, handle) in self.handles.iter_mut() {
            let Some(node) = store.node(node_id) else {
                continue;
            };
            handle.set_position(self.mapper.to_scene(node.position()));
            handle.set_selected(store.is_selected(node_id));
            pushed += 1;
        }
        pushed
    }

    /// Re-derives every scene coordinate and edge route from the current store state.
    pub fn frame(&self) -> SceneFrame {
        let snapshot = self.store.borrow().snapshot();
        let nodes = snapshot
            .nodes
            .iter()
            .map(|node| SceneNodeProps {
                id: node.id().clone(),
                label: node.label().to_owned(),
                position: self.mapper.to_scene(node.position()),
                selected: snapshot.selected.as_ref() == Some(node.id()),
            })
            .collect();
        let edges = route_edges(&snapshot, &self.mapper);
        SceneFrame { rev: snapshot.rev, nodes, edges }
    }
}
