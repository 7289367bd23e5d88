// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Batched graph mutations.
//!
//! A batch is applied to a working copy of the store and committed only if every op succeeded,
//! so either view can submit a change list and never leave the shared state half-applied. The
//! result carries a minimal delta the views can use to decide what to refresh.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::geom::PlanarPosition;
use crate::model::{EdgeId, NodeId};
use crate::store::{GraphStore, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum GraphOp {
    AddNode { node_id: NodeId, label: String, position: PlanarPosition },
    MoveNode { node_id: NodeId, position: PlanarPosition },
    DeleteNode { node_id: NodeId },
    AddEdge { source: NodeId, target: NodeId },
    RemoveEdge { edge_id: EdgeId },
    Select { node_id: NodeId },
    Deselect { node_id: NodeId },
    ClearSelection,
}

impl GraphOp {
    /// Only node and edge creation can be rejected; every other op degrades to a no-op.
    pub fn is_fallible(&self) -> bool {
        matches!(self, Self::AddNode { .. } | Self::AddEdge { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum ObjectRef {
    Node(NodeId),
    Edge(EdgeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Which objects a batch added, removed or updated.
///
/// Unknown-id ops are no-ops and leave no trace here. Edges removed by a node-delete cascade
/// are listed in `removed` next to the node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Delta {
    pub added: Vec<ObjectRef>,
    pub removed: Vec<ObjectRef>,
    pub updated: Vec<ObjectRef>,
    pub selection_changed: bool,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.updated.is_empty()
            && !self.selection_changed
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<ObjectRef>,
    removed: HashSet<ObjectRef>,
    updated: HashSet<ObjectRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, object_ref: ObjectRef) {
        self.updated.remove(&object_ref);
        self.added.insert(object_ref);
    }

    fn record_removed(&mut self, object_ref: ObjectRef) {
        self.updated.remove(&object_ref);
        // Added and removed within the same batch: nobody ever saw it.
        if self.added.remove(&object_ref) {
            return;
        }
        self.removed.insert(object_ref);
    }

    fn record_updated(&mut self, object_ref: ObjectRef) {
        if self.added.contains(&object_ref) || self.removed.contains(&object_ref) {
            return;
        }
        self.updated.insert(object_ref);
    }

    fn finish(self, selection_changed: bool) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta { added, removed, updated, selection_changed }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyError {
    pub op_index: usize,
    pub error: StoreError,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op #{} rejected: {}", self.op_index, self.error)
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Applies `ops` all-or-nothing. A batch that changes anything bumps the revision once.
pub fn apply_ops(store: &mut GraphStore, ops: &[GraphOp]) -> Result<ApplyResult, ApplyError> {
    let base_rev = store.rev();
    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: base_rev, applied: 0, delta: Delta::default() });
    }

    let selection_before = store.selection().cloned();
    let mut delta = DeltaBuilder::default();

    if ops.iter().any(GraphOp::is_fallible) {
        let mut working = store.clone();
        apply_all(&mut working, ops, &mut delta)?;
        *store = working;
    } else {
        // Nothing can be rejected, so there is nothing to roll back. Drag frames take this path.
        apply_all(store, ops, &mut delta)?;
    }

    if store.rev() != base_rev {
        store.set_rev(base_rev.saturating_add(1));
    }
    let selection_changed = store.selection() != selection_before.as_ref();

    let delta = delta.finish(selection_changed);
    debug!(
        ops = ops.len(),
        new_rev = store.rev(),
        added = delta.added.len(),
        removed = delta.removed.len(),
        updated = delta.updated.len(),
        "applied graph ops"
    );
    Ok(ApplyResult { new_rev: store.rev(), applied: ops.len(), delta })
}

fn apply_all(
    store: &mut GraphStore,
    ops: &[GraphOp],
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    for (op_index, op) in ops.iter().enumerate() {
        apply_op(store, op, delta).map_err(|error| ApplyError { op_index, error })?;
    }
    Ok(())
}

// Per-op mutation helpers used by `apply_ops`.
include!("ops_impl.rs");
