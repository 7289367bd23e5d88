// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Top-level dual view: one shared store, two adapters, one active view at a time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::{PlanarAdapter, PlanarFrame, SceneAdapter, SceneFrame};
use crate::geom::CoordinateMapper;
use crate::store::SharedStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Planar,
    Scene,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Planar => Self::Scene,
            Self::Scene => Self::Planar,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planar => "planar",
            Self::Scene => "scene",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewMode(pub String);

impl fmt::Display for UnknownViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view mode `{}` (expected `planar` or `scene`)", self.0)
    }
}

impl std::error::Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "planar" | "2d" => Ok(Self::Planar),
            "scene" | "3d" => Ok(Self::Scene),
            other => Err(UnknownViewMode(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewFrame {
    Planar(PlanarFrame),
    Scene(SceneFrame),
}

impl ViewFrame {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Planar(_) => ViewMode::Planar,
            Self::Scene(_) => ViewMode::Scene,
        }
    }

    pub fn rev(&self) -> u64 {
        match self {
            Self::Planar(frame) => frame.rev,
            Self::Scene(frame) => frame.rev,
        }
    }
}

/// Owns both adapters over a single store. Only the active view is rendered; the inactive one
/// holds no state that could drift, so switching is instant.
pub struct DualView {
    store: SharedStore,
    planar: PlanarAdapter,
    scene: SceneAdapter,
    mode: ViewMode,
}

impl DualView {
    pub fn new(store: SharedStore, mapper: CoordinateMapper, mode: ViewMode) -> Self {
        Self {
            planar: PlanarAdapter::new(store.clone()),
            scene: SceneAdapter::new(store.clone(), mapper),
            store,
            mode,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn planar(&self) -> &PlanarAdapter {
        &self.planar
    }

    pub fn scene(&self) -> &SceneAdapter {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneAdapter {
        &mut self.scene
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        if self.mode == ViewMode::Scene {
            // A gizmo that is no longer rendered cannot send its drag-end.
            self.scene.end_all_drags();
        }
        debug!(from = %self.mode, to = %mode, "switching view");
        self.mode = mode;
    }

    pub fn toggle(&mut self) -> ViewMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn render(&mut self) -> ViewFrame {
        match self.mode {
            ViewMode::Planar => ViewFrame::Planar(self.planar.frame()),
            ViewMode::Scene => {
                self.scene.sync_handles();
                ViewFrame::Scene(self.scene.frame())
            }
        }
    }
}
