// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core graph data model.
//!
//! Nodes carry a planar position only; anything three-dimensional is derived from it.

pub mod fixtures;
pub mod graph;
pub mod ids;

pub use graph::{Edge, GraphSnapshot, Node};
pub use ids::{EdgeId, Id, IdError, NodeId};
