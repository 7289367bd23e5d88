// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal edge routing for the scene view.
//!
//! Every edge is drawn as an L-shaped polyline `start -> elbow -> end` with axis-aligned
//! segments, plus an arrowhead orientation at the end. Routes are recomputed from live node
//! positions on every render; nothing here is cached.

use std::collections::HashMap;
use std::f64::consts::FRAC_PI_2;

use glam::{DVec2, DVec3};
use serde::Serialize;
use smallvec::SmallVec;
use tracing::warn;

use crate::geom::{CoordinateMapper, ScenePosition};
use crate::model::{EdgeId, GraphSnapshot, NodeId};

pub type Waypoints = SmallVec<[ScenePosition; 3]>;

/// Which axis the route travels along first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendAxis {
    HorizontalFirst,
    VerticalFirst,
}

impl BendAxis {
    /// The dominant axis goes first; ties go vertical-first.
    pub fn between(source: ScenePosition, target: ScenePosition) -> Self {
        let dx = (target.x - source.x).abs();
        let dy = (target.y - source.y).abs();
        if dx > dy {
            Self::HorizontalFirst
        } else {
            Self::VerticalFirst
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRoute {
    pub waypoints: Waypoints,
    /// Rotation about the scene `z` axis for a cone whose default tip points along `+y`.
    pub arrow_angle: f64,
}

impl EdgeRoute {
    pub fn start(&self) -> ScenePosition {
        self.waypoints[0]
    }

    pub fn end(&self) -> ScenePosition {
        self.waypoints[self.waypoints.len() - 1]
    }

    pub fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| DVec3::from(pair[1]).distance(DVec3::from(pair[0])))
            .sum()
    }
}

pub fn route_edge(source: ScenePosition, target: ScenePosition) -> EdgeRoute {
    let elbow = match BendAxis::between(source, target) {
        BendAxis::HorizontalFirst => ScenePosition::new(target.x, source.y, source.z),
        BendAxis::VerticalFirst => ScenePosition::new(source.x, target.y, source.z),
    };
    let waypoints: Waypoints = SmallVec::from_buf([source, elbow, target]);
    let arrow_angle = arrow_angle(&waypoints);
    EdgeRoute { waypoints, arrow_angle }
}

/// Angle of the last segment that has any in-plane extent, rotated by -90°.
///
/// Coincident endpoints produce a fully degenerate path; the arrow then keeps the cone's
/// default orientation rotated the same way.
fn arrow_angle(waypoints: &[ScenePosition]) -> f64 {
    for pair in waypoints.windows(2).rev() {
        let dir = DVec2::new(pair[1].x - pair[0].x, pair[1].y - pair[0].y);
        if dir != DVec2::ZERO {
            return dir.y.atan2(dir.x) - FRAC_PI_2;
        }
    }
    -FRAC_PI_2
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub route: EdgeRoute,
}

/// Routes every edge of `snapshot`, in edge order.
///
/// A missing endpoint should be unreachable (deletes cascade), but rendering must not fail on
/// it: the missing end collapses onto the other one, or onto the plane origin if both are gone.
pub fn route_edges(snapshot: &GraphSnapshot, mapper: &CoordinateMapper) -> Vec<RoutedEdge> {
    let scene_positions = snapshot
        .nodes
        .iter()
        .map(|node| (node.id(), mapper.to_scene(node.position())))
        .collect::<HashMap<_, _>>();
    let scene_of = |node_id: &NodeId| scene_positions.get(node_id).copied();

    snapshot
        .edges
        .iter()
        .map(|edge| {
            let source = scene_of(edge.source());
            let target = scene_of(edge.target());
            let (source, target) = match (source, target) {
                (Some(source), Some(target)) => (source, target),
                (source, target) => {
                    warn!(
                        edge_id = %edge.id(),
                        source = %edge.source(),
                        target = %edge.target(),
                        "edge references a missing node; routing degenerate path"
                    );
                    let fallback = source
                        .or(target)
                        .unwrap_or(ScenePosition::new(0.0, 0.0, mapper.elevation()));
                    (source.unwrap_or(fallback), target.unwrap_or(fallback))
                }
            };
            RoutedEdge {
                id: edge.id().clone(),
                source: edge.source().clone(),
                target: edge.target().clone(),
                route: route_edge(source, target),
            }
        })
        .collect()
}
