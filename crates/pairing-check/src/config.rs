use std::path::{Path, PathBuf};

use pairing_core::{DEFAULT_MIRROR_SEGMENT, DEFAULT_SOURCE_SEGMENT, NewFilePolicy, TreePair};
use serde::Deserialize;

use crate::error::{CliError, Result};

pub(crate) const DEFAULT_CONFIG_PATH: &str = ".github/pairing-check.toml";
pub(crate) const DEFAULT_BASE_REF: &str = "main";

/// Settings read from the optional TOML config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub base_ref: Option<String>,
    pub source_segment: Option<String>,
    pub mirror_segment: Option<String>,
    pub new_files: Option<NewFilePolicy>,
}

impl FileConfig {
    /// Loads `explicit` when given; otherwise the default path if it exists.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| CliError::ConfigRead {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| CliError::ConfigParse { path, source })
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub base_ref: Option<String>,
    pub source_segment: Option<String>,
    pub mirror_segment: Option<String>,
    pub new_files: Option<NewFilePolicy>,
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub base_ref: String,
    pub pair: TreePair,
    pub new_file_policy: NewFilePolicy,
}

impl Settings {
    pub(crate) fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let source = overrides
            .source_segment
            .or(file.source_segment)
            .unwrap_or_else(|| DEFAULT_SOURCE_SEGMENT.to_string());
        let mirror = overrides
            .mirror_segment
            .or(file.mirror_segment)
            .unwrap_or_else(|| DEFAULT_MIRROR_SEGMENT.to_string());

        Ok(Self {
            base_ref: overrides
                .base_ref
                .or(file.base_ref)
                .unwrap_or_else(|| DEFAULT_BASE_REF.to_string()),
            pair: TreePair::new(source, mirror)?,
            new_file_policy: overrides.new_files.or(file.new_files).unwrap_or_default(),
        })
    }
}
