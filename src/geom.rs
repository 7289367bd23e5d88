// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Planar and scene coordinates, and the mapping between them.
//!
//! The planar position of a node is the only stored coordinate. Scene positions are always
//! derived through a [`CoordinateMapper`], so the two views cannot drift apart.
//!
//! Conventions:
//! - planar: `+y` points down (diagram/screen convention)
//! - scene: `+y` points up, nodes sit on the plane `z = elevation`

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCALE_DIVISOR: f64 = 50.0;
pub const DEFAULT_ELEVATION: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPosition {
    pub x: f64,
    pub y: f64,
}

impl PlanarPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePosition {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<ScenePosition> for DVec3 {
    fn from(p: ScenePosition) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for ScenePosition {
    fn from(v: DVec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapperError {
    InvalidScaleDivisor { divisor: f64 },
    NonFiniteElevation { elevation: f64 },
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScaleDivisor { divisor } => {
                write!(f, "scale divisor must be finite and > 0 (got {divisor})")
            }
            Self::NonFiniteElevation { elevation } => {
                write!(f, "scene elevation must be finite (got {elevation})")
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Affine planar ⇄ scene mapping: scale by `1 / scale_divisor` and flip the vertical axis.
///
/// The mapper holds no view or camera state; two mappers with the same parameters are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale_divisor: f64,
    elevation: f64,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self { scale_divisor: DEFAULT_SCALE_DIVISOR, elevation: DEFAULT_ELEVATION }
    }
}

impl CoordinateMapper {
    pub fn new(scale_divisor: f64, elevation: f64) -> Result<Self, MapperError> {
        if !scale_divisor.is_finite() || scale_divisor <= 0.0 {
            return Err(MapperError::InvalidScaleDivisor { divisor: scale_divisor });
        }
        if !elevation.is_finite() {
            return Err(MapperError::NonFiniteElevation { elevation });
        }
        Ok(Self { scale_divisor, elevation })
    }

    pub fn scale_divisor(&self) -> f64 {
        self.scale_divisor
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn to_scene(&self, p: PlanarPosition) -> ScenePosition {
        ScenePosition {
            x: p.x / self.scale_divisor,
            y: -p.y / self.scale_divisor,
            z: self.elevation,
        }
    }

    /// Inverse of [`CoordinateMapper::to_scene`]; the scene `z` is dropped.
    pub fn to_planar(&self, s: ScenePosition) -> PlanarPosition {
        PlanarPosition { x: s.x * self.scale_divisor, y: -s.y * self.scale_divisor }
    }
}

/// [`CoordinateMapper::to_scene`] with the default mapper.
pub fn to_scene(p: PlanarPosition) -> ScenePosition {
    CoordinateMapper::default().to_scene(p)
}

/// [`CoordinateMapper::to_planar`] with the default mapper.
pub fn to_planar(s: ScenePosition) -> PlanarPosition {
    CoordinateMapper::default().to_planar(s)
}
