// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Single-node selection shared by both views.
//!
//! The controller itself does not know which nodes exist. Liveness is the store's job: it only
//! forwards selections of live nodes and clears the selection when the selected node is deleted.

use crate::model::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<NodeId>,
}

impl SelectionController {
    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, node_id: &NodeId) -> bool {
        self.selected.as_ref() == Some(node_id)
    }

    /// Returns `true` when the selection changed.
    pub fn select(&mut self, node_id: NodeId) -> bool {
        if self.selected.as_ref() == Some(&node_id) {
            return false;
        }
        self.selected = Some(node_id);
        true
    }

    /// Returns `true` when a selection was cleared.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Clears only if `node_id` is the current selection.
    ///
    /// Views report "deselected" for nodes that were never selected (e.g. after the other view
    /// moved the selection); those notifications must not wipe the real selection.
    pub fn deselect(&mut self, node_id: &NodeId) -> bool {
        if !self.is_selected(node_id) {
            return false;
        }
        self.clear()
    }
}
