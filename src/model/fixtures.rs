// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seed graphs used by the demo session and by tests.

use super::graph::{Edge, Node};
use super::ids::{EdgeId, NodeId};
use crate::geom::PlanarPosition;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

/// Three nodes, `1 -> 2` and `1 -> 3`.
pub fn demo_nodes() -> Vec<Node> {
    vec![
        Node::new(nid("1"), "Node 1", PlanarPosition::new(250.0, 50.0)),
        Node::new(nid("2"), "Node 2", PlanarPosition::new(100.0, 200.0)),
        Node::new(nid("3"), "Node 3", PlanarPosition::new(400.0, 200.0)),
    ]
}

pub fn demo_edges() -> Vec<Edge> {
    vec![Edge::new(eid("e1-2"), nid("1"), nid("2")), Edge::new(eid("e1-3"), nid("1"), nid("3"))]
}

/// A `cols x rows` lattice with right and down neighbours connected.
///
/// Node ids are `r<row>c<col>`; spacing is 150 planar units.
pub fn lattice(cols: usize, rows: usize) -> (Vec<Node>, Vec<Edge>) {
    let id = |row: usize, col: usize| nid(&format!("r{row}c{col}"));

    let mut nodes = Vec::with_capacity(cols * rows);
    let mut edges = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let position = PlanarPosition::new(col as f64 * 150.0, row as f64 * 150.0);
            nodes.push(Node::new(id(row, col), format!("{row}/{col}"), position));
            if col + 1 < cols {
                let edge_id = eid(&format!("e-r{row}c{col}-right"));
                edges.push(Edge::new(edge_id, id(row, col), id(row, col + 1)));
            }
            if row + 1 < rows {
                let edge_id = eid(&format!("e-r{row}c{col}-down"));
                edges.push(Edge::new(edge_id, id(row, col), id(row + 1, col)));
            }
        }
    }
    (nodes, edges)
}
