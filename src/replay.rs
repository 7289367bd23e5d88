// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gesture scripts: a seed graph plus a list of view-tagged collaborator events.
//!
//! Used by the `dualgraph` binary to drive both adapters headlessly. Each event belongs to one
//! view and is rejected while that view is not the active one, mirroring a UI where only the
//! rendered view can emit gestures.

use std::fmt;

use glam::{DMat4, DVec3};
use serde::Deserialize;

use crate::adapter::{Connection, EdgeChange, NodeChange};
use crate::geom::{CoordinateMapper, PlanarPosition};
use crate::model::{fixtures, Edge, EdgeId, Node, NodeId};
use crate::ops::ApplyError;
use crate::store::{GraphStore, StoreError};
use crate::view::{DualView, ViewFrame, ViewMode};

/// Built-in script used by `--demo`.
pub const DEMO_SCRIPT: &str = include_str!("../data/demo-script.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedNode {
    pub id: NodeId,
    pub label: String,
    pub position: PlanarPosition,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedEdge {
    #[serde(default)]
    pub id: Option<EdgeId>,
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedGraph {
    pub nodes: Vec<SeedNode>,
    #[serde(default)]
    pub edges: Vec<SeedEdge>,
}

impl SeedGraph {
    /// Seeds a store. Edges without an explicit id get `e{source}-{target}`, suffixed like
    /// edges created by a connect.
    pub fn into_store(self) -> Result<GraphStore, ReplayError> {
        let nodes =
            self.nodes.into_iter().map(|node| Node::new(node.id, node.label, node.position));
        let mut store = GraphStore::seeded(nodes, Vec::<Edge>::new())?;
        for edge in self.edges {
            store.seed_edge(edge.id, &edge.source, &edge.target)?;
        }
        Ok(store)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ReplayStep {
    NodeChanges {
        changes: Vec<NodeChange>,
    },
    EdgeChanges {
        changes: Vec<EdgeChange>,
    },
    Connect {
        source: NodeId,
        target: NodeId,
    },
    PaneClick,
    BeginDrag {
        id: NodeId,
    },
    /// One gizmo frame. `matrix` is column-major and wins over `translation`; with neither the
    /// frame is the identity.
    Drag {
        id: NodeId,
        #[serde(default)]
        translation: Option<[f64; 3]>,
        #[serde(default)]
        matrix: Option<[f64; 16]>,
    },
    EndDrag {
        id: NodeId,
    },
    Click {
        id: NodeId,
    },
    Miss,
    Delete {
        id: NodeId,
    },
    ToggleView,
    SetView {
        view: ViewMode,
    },
}

impl ReplayStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NodeChanges { .. } => "nodeChanges",
            Self::EdgeChanges { .. } => "edgeChanges",
            Self::Connect { .. } => "connect",
            Self::PaneClick => "paneClick",
            Self::BeginDrag { .. } => "beginDrag",
            Self::Drag { .. } => "drag",
            Self::EndDrag { .. } => "endDrag",
            Self::Click { .. } => "click",
            Self::Miss => "miss",
            Self::Delete { .. } => "delete",
            Self::ToggleView => "toggleView",
            Self::SetView { .. } => "setView",
        }
    }

    /// The view that emits this event, or `None` for view switches.
    pub fn view(&self) -> Option<ViewMode> {
        match self {
            Self::NodeChanges { .. }
            | Self::EdgeChanges { .. }
            | Self::Connect { .. }
            | Self::PaneClick => Some(ViewMode::Planar),
            Self::BeginDrag { .. }
            | Self::Drag { .. }
            | Self::EndDrag { .. }
            | Self::Click { .. }
            | Self::Miss
            | Self::Delete { .. } => Some(ViewMode::Scene),
            Self::ToggleView | Self::SetView { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayScript {
    /// Seed graph; the three-node demo graph when absent.
    #[serde(default)]
    pub graph: Option<SeedGraph>,
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn from_json_str(raw: &str) -> Result<Self, ReplayError> {
        serde_json::from_str(raw).map_err(ReplayError::Parse)
    }

    pub fn demo() -> Result<Self, ReplayError> {
        Self::from_json_str(DEMO_SCRIPT)
    }

    pub fn seed_store(&self) -> Result<GraphStore, ReplayError> {
        match &self.graph {
            Some(graph) => graph.clone().into_store(),
            None => Ok(GraphStore::seeded(fixtures::demo_nodes(), fixtures::demo_edges())?),
        }
    }
}

#[derive(Debug)]
pub enum ReplayError {
    Parse(serde_json::Error),
    Store(StoreError),
    Apply(ApplyError),
    InactiveView { step: usize, event: &'static str, view: ViewMode },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid script: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Apply(err) => write!(f, "{err}"),
            Self::InactiveView { step, event, view } => {
                write!(f, "step #{step}: `{event}` requires the {view} view to be active")
            }
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Apply(err) => Some(err),
            Self::InactiveView { .. } => None,
        }
    }
}

impl From<StoreError> for ReplayError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<ApplyError> for ReplayError {
    fn from(err: ApplyError) -> Self {
        Self::Apply(err)
    }
}

fn drag_matrix(translation: Option<[f64; 3]>, matrix: Option<[f64; 16]>) -> DMat4 {
    match (matrix, translation) {
        (Some(cols), _) => DMat4::from_cols_array(&cols),
        (None, Some(t)) => DMat4::from_translation(DVec3::from_array(t)),
        (None, None) => DMat4::IDENTITY,
    }
}

/// Drives a [`DualView`] with script steps.
pub struct Replayer {
    view: DualView,
    step: usize,
}

impl Replayer {
    pub fn new(store: GraphStore, mapper: CoordinateMapper, mode: ViewMode) -> Self {
        Self { view: DualView::new(store.into_shared(), mapper, mode), step: 0 }
    }

    pub fn view(&self) -> &DualView {
        &self.view
    }

    pub fn render(&mut self) -> ViewFrame {
        self.view.render()
    }

    /// Applies one step and renders the active view.
    pub fn apply(&mut self, step: &ReplayStep) -> Result<ViewFrame, ReplayError> {
        let index = self.step;
        self.step += 1;

        if let Some(view) = step.view() {
            if view != self.view.mode() {
                return Err(ReplayError::InactiveView { step: index, event: step.name(), view });
            }
        }

        match step {
            ReplayStep::NodeChanges { changes } => {
                self.view.planar().apply_node_changes(changes)?;
            }
            ReplayStep::EdgeChanges { changes } => {
                self.view.planar().apply_edge_changes(changes)?;
            }
            ReplayStep::Connect { source, target } => {
                let connection = Connection { source: source.clone(), target: target.clone() };
                self.view.planar().connect(&connection)?;
            }
            ReplayStep::PaneClick => {
                self.view.planar().pane_click();
            }
            ReplayStep::BeginDrag { id } => {
                self.view.scene_mut().begin_drag(id);
            }
            ReplayStep::Drag { id, translation, matrix } => {
                self.view.scene_mut().drag(id, &drag_matrix(*translation, *matrix));
            }
            ReplayStep::EndDrag { id } => {
                self.view.scene_mut().end_drag(id);
            }
            ReplayStep::Click { id } => {
                self.view.scene().click(id);
            }
            ReplayStep::Miss => {
                self.view.scene().miss();
            }
            ReplayStep::Delete { id } => {
                self.view.scene_mut().delete(id);
            }
            ReplayStep::ToggleView => {
                self.view.toggle();
            }
            ReplayStep::SetView { view } => {
                self.view.set_mode(*view);
            }
        }
        Ok(self.view.render())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{ReplayError, ReplayScript, ReplayStep, Replayer};
    use crate::geom::{CoordinateMapper, PlanarPosition};
    use crate::model::NodeId;
    use crate::ops::ApplyError;
    use crate::store::{EdgeEndpoint, StoreError};
    use crate::view::{ViewFrame, ViewMode};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[fixture]
    fn replayer() -> Replayer {
        let script = ReplayScript::from_json_str(r#"{"steps": []}"#).expect("script");
        let store = script.seed_store().expect("seed");
        Replayer::new(store, CoordinateMapper::default(), ViewMode::Planar)
    }

    #[test]
    fn demo_script_parses_and_runs() {
        let script = ReplayScript::demo().expect("demo script");
        let store = script.seed_store().expect("seed");
        let mut replayer = Replayer::new(store, CoordinateMapper::default(), ViewMode::Planar);

        for step in &script.steps {
            replayer.apply(step).expect("demo step");
        }
    }

    #[test]
    fn seed_graph_generates_missing_edge_ids() {
        let script = ReplayScript::from_json_str(
            r#"{
                "graph": {
                    "nodes": [
                        {"id": "a", "label": "A", "position": {"x": 0, "y": 0}},
                        {"id": "b", "label": "B", "position": {"x": 50, "y": 0}}
                    ],
                    "edges": [{"source": "a", "target": "b"}]
                },
                "steps": []
            }"#,
        )
        .expect("script");

        let store = script.seed_store().expect("seed");
        assert_eq!(store.edges().next().map(|e| e.id().as_str()), Some("ea-b"));
        assert_eq!(store.rev(), 0);
    }

    #[test]
    fn id_less_parallel_seed_edges_are_suffixed() {
        let script = ReplayScript::from_json_str(
            r#"{
                "graph": {
                    "nodes": [
                        {"id": "a", "label": "A", "position": {"x": 0, "y": 0}},
                        {"id": "b", "label": "B", "position": {"x": 50, "y": 0}}
                    ],
                    "edges": [{"source": "a", "target": "b"}, {"source": "a", "target": "b"}]
                },
                "steps": []
            }"#,
        )
        .expect("script");

        let store = script.seed_store().expect("seed");
        let ids = store.edges().map(|e| e.id().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["ea-b", "ea-b-2"]);
    }

    #[test]
    fn parse_errors_keep_the_json_error_as_source() {
        use std::error::Error;

        let err = ReplayScript::from_json_str(r#"{"steps": [{"event": "teleport"}]}"#)
            .expect_err("unknown event");

        assert!(matches!(err, ReplayError::Parse(_)));
        let source = err.source().expect("source");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn steps_parse_from_event_tagged_json() {
        let raw = r#"[
            {"event": "paneClick"},
            {"event": "drag", "id": "1", "translation": [1, 0, 0]},
            {"event": "setView", "view": "scene"}
        ]"#;
        let steps: Vec<ReplayStep> = serde_json::from_str(raw).expect("steps");

        assert_eq!(steps[0], ReplayStep::PaneClick);
        assert_eq!(
            steps[1],
            ReplayStep::Drag { id: nid("1"), translation: Some([1.0, 0.0, 0.0]), matrix: None }
        );
        assert_eq!(steps[2], ReplayStep::SetView { view: ViewMode::Scene });
    }

    #[rstest]
    fn scene_events_are_rejected_while_planar_is_active(mut replayer: Replayer) {
        let err = replayer.apply(&ReplayStep::Miss).expect_err("inactive view");
        assert!(matches!(
            err,
            ReplayError::InactiveView { step: 0, event: "miss", view: ViewMode::Scene }
        ));
    }

    #[rstest]
    fn scene_drag_then_planar_frame(mut replayer: Replayer) {
        replayer.apply(&ReplayStep::ToggleView).expect("toggle");
        replayer
            .apply(&ReplayStep::Drag {
                id: nid("2"),
                translation: Some([0.0, 1.0, 0.0]),
                matrix: None,
            })
            .expect("drag");
        let frame = replayer.apply(&ReplayStep::ToggleView).expect("toggle back");

        let ViewFrame::Planar(frame) = frame else {
            panic!("expected planar frame");
        };
        assert_eq!(frame.nodes[1].position, PlanarPosition::new(100.0, 150.0));
        assert!(!replayer.view().scene().is_dragging(&nid("2")));
    }

    #[rstest]
    fn invalid_connect_surfaces_store_error(mut replayer: Replayer) {
        let err = replayer
            .apply(&ReplayStep::Connect { source: nid("1"), target: nid("ghost") })
            .expect_err("invalid connect");

        match err {
            ReplayError::Store(error) => assert_eq!(
                error,
                StoreError::InvalidEndpoint {
                    endpoint: EdgeEndpoint::Target,
                    node_id: nid("ghost"),
                }
            ),
            other => panic!("expected store error, got {other:?}"),
        }
    }

    #[test]
    fn apply_errors_convert() {
        let error =
            StoreError::InvalidEndpoint { endpoint: EdgeEndpoint::Source, node_id: nid("x") };
        let err = ReplayError::from(ApplyError { op_index: 1, error });
        assert!(err.to_string().starts_with("op #1 rejected"));
    }
}
