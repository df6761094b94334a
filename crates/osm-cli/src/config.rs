//! Run configuration.
//!
//! A run is described by an optional TOML file:
//!
//! ```toml
//! input = "newyork.osm"
//! output_dir = "out"
//! validate = true
//! validate_every = 100
//! schema = "element.schema.json"
//!
//! [tables]
//! nodes = "points.csv"
//!
//! [rules]
//! default_tag_type = "regular"
//! street_suffixes = { "Pkwy" = "Parkway" }
//! ```
//!
//! Command line flags are applied on top with [`RunConfig::apply`].

use std::collections::BTreeMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use osm_model::{ModelError, Table};
use osm_output::TablePaths;
use osm_transform::{RuleOverrides, ShapingRules};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [tables] entry: {source}")]
    Table {
        #[source]
        source: ModelError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// The OSM XML document to read.
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Table name to file path. Relative paths resolve against `output_dir`.
    pub tables: BTreeMap<String, PathBuf>,
    pub validate: bool,
    /// Validate every n-th element only; 1 validates all of them.
    pub validate_every: NonZeroUsize,
    /// JSON Schema file replacing the built-in element schema.
    pub schema: Option<PathBuf>,
    pub rules: RuleOverrides,
}

/// Settings given on the command line. `None` keeps the file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// `Some(false)` turns validation off even if the file enables it.
    pub validate: Option<bool>,
    pub validate_every: Option<NonZeroUsize>,
    pub schema: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: PathBuf::from("."),
            tables: BTreeMap::new(),
            validate: false,
            validate_every: NonZeroUsize::MIN,
            schema: None,
            rules: RuleOverrides::default(),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses a configuration and checks its `[tables]` names.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse { source })?;
        config.table_paths()?;
        Ok(config)
    }

    /// Output file of every table.
    pub fn table_paths(&self) -> Result<TablePaths, ConfigError> {
        let mut paths = TablePaths::in_dir(&self.output_dir);
        for (name, path) in &self.tables {
            let table: Table = name
                .parse()
                .map_err(|source| ConfigError::Table { source })?;
            paths = paths.with_path(table, self.output_dir.join(path));
        }
        Ok(paths)
    }

    /// Applies command line flags on top of the file settings.
    pub fn apply(&mut self, overrides: RunOverrides) {
        if let Some(input) = overrides.input {
            self.input = Some(input);
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(every) = overrides.validate_every {
            self.validate_every = every;
        }
        if let Some(schema) = overrides.schema {
            self.schema = Some(schema);
        }
        if let Some(validate) = overrides.validate {
            self.validate = validate;
        }
    }

    pub fn shaping_rules(&self) -> ShapingRules {
        ShapingRules::with_overrides(&self.rules)
    }
}
