// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime configuration, loaded from an optional JSON file.
//!
//! Every field is optional; a missing file field keeps its default.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geom::{CoordinateMapper, MapperError, DEFAULT_ELEVATION, DEFAULT_SCALE_DIVISOR};
use crate::view::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SyncConfig {
    /// Planar units per scene unit.
    pub scale_divisor: f64,
    /// Scene `z` of the node plane.
    pub elevation: f64,
    pub initial_view: ViewMode,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            scale_divisor: DEFAULT_SCALE_DIVISOR,
            elevation: DEFAULT_ELEVATION,
            initial_view: ViewMode::Planar,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: Option<PathBuf>, source: serde_json::Error },
    Mapper(MapperError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse { path: Some(path), source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            Self::Parse { path: None, source } => write!(f, "invalid config: {source}"),
            Self::Mapper(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Mapper(err) => Some(err),
        }
    }
}

impl From<MapperError> for ConfigError {
    fn from(err: MapperError) -> Self {
        Self::Mapper(err)
    }
}

impl SyncConfig {
    /// Parses and validates a config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.mapper()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_owned(), source })?;
        match Self::from_json_str(&raw) {
            Err(ConfigError::Parse { path: None, source }) => {
                Err(ConfigError::Parse { path: Some(path.to_owned()), source })
            }
            other => other,
        }
    }

    pub fn mapper(&self) -> Result<CoordinateMapper, MapperError> {
        CoordinateMapper::new(self.scale_divisor, self.elevation)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ConfigError, SyncConfig};
    use crate::geom::MapperError;
    use crate::view::ViewMode;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SyncConfig::from_json_str("{}").expect("parse");
        assert_eq!(config, SyncConfig::default());
        assert_eq!(config.scale_divisor, 50.0);
        assert_eq!(config.elevation, 0.0);
        assert_eq!(config.initial_view, ViewMode::Planar);
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let config = SyncConfig::from_json_str(r#"{"scaleDivisor": 25, "initialView": "scene"}"#)
            .expect("parse");
        assert_eq!(config.scale_divisor, 25.0);
        assert_eq!(config.elevation, 0.0);
        assert_eq!(config.initial_view, ViewMode::Scene);

        let mapper = config.mapper().expect("mapper");
        assert_eq!(mapper.scale_divisor(), 25.0);
    }

    #[rstest]
    #[case::zero(r#"{"scaleDivisor": 0}"#)]
    #[case::negative(r#"{"scaleDivisor": -10}"#)]
    fn invalid_divisor_is_rejected(#[case] raw: &str) {
        let err = SyncConfig::from_json_str(raw).expect_err("invalid");
        assert!(matches!(err, ConfigError::Mapper(MapperError::InvalidScaleDivisor { .. })));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SyncConfig::from_json_str(r#"{"scale": 10}"#).expect_err("unknown field");
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SyncConfig::load("/definitely/not/here/dualgraph.json").expect_err("missing");
        assert!(err.to_string().contains("dualgraph.json"));
    }
}
