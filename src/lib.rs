// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dualgraph: one graph, two views.
//!
//! A single [`store::GraphStore`] holds nodes, edges and the selection. A planar (2D) view and a
//! perspective scene (3D) view are both thin adapters over that store: they translate gestures
//! into mutations and rebuild their render input from the store on demand. Scene coordinates and
//! edge routes are always derived, never stored.

pub mod adapter;
pub mod config;
pub mod geom;
pub mod model;
pub mod ops;
pub mod replay;
pub mod route;
pub mod selection;
pub mod store;
pub mod view;
