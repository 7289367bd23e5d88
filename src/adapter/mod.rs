// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View adapters.
//!
//! Each adapter holds the same shared store handle. Inbound calls normalize collaborator
//! gestures into store mutations; outbound calls rebuild the collaborator's render input from
//! the store. Neither adapter keeps a private copy of graph state.

pub mod planar;
pub mod scene;

pub use planar::{
    Connection, EdgeChange, NodeChange, PlanarAdapter, PlanarEdgeProps, PlanarFrame,
    PlanarNodeProps,
};
pub use scene::{SceneAdapter, SceneFrame, SceneNodeHandle, SceneNodeProps};
