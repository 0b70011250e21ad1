//! Catalog of known metadata types.
//!
//! The catalog is read through the `config` crate, so it can live in any
//! format `config` understands (TOML, JSON, YAML, ...). Scalar settings such
//! as `log` can be overridden by environment variables prefixed with
//! `SOLENOPSIS` and split on `__` (e.g. `SOLENOPSIS__LOG=debug`). The `types`
//! table array is read from the file only.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::component::ComponentType;
use crate::error::Result;
use crate::org::Org;

pub const ENV_PREFIX: &str = "SOLENOPSIS";
pub const DEFAULT_CATALOG: &str = "solenopsis.toml";
pub const DEFAULT_LOG: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeEntry {
    pub xml_name: String,
    pub directory_name: String,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub meta_file: bool,
}

impl From<&TypeEntry> for ComponentType {
    fn from(entry: &TypeEntry) -> Self {
        let component_type = ComponentType::new(&entry.xml_name, &entry.directory_name)
            .with_meta_file(entry.meta_file);
        match &entry.suffix {
            Some(suffix) => component_type.with_suffix(suffix),
            None => component_type,
        }
    }
}

fn default_log() -> String {
    DEFAULT_LOG.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Default `tracing` filter for the binary, used when `RUST_LOG` is unset.
    #[serde(default = "default_log")]
    pub log: String,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: default_log(),
            types: Vec::new(),
        }
    }
}

impl Settings {
    /// Reads the catalog at `path`, which may be missing, and applies
    /// overrides from the process environment on top.
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_environment(path, Self::environment())
    }

    /// The environment source `load` uses.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).separator("__")
    }

    pub fn load_with_environment(path: &str, environment: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        debug!(path, log = %settings.log, types = settings.types.len(), "loaded catalog");
        Ok(settings)
    }

    pub fn parse(source: &str, format: FileFormat) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(source, format))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn component_types(&self) -> Vec<ComponentType> {
        self.types.iter().map(ComponentType::from).collect()
    }

    pub fn seed_org(&self) -> Result<Org<ComponentType>> {
        Org::new(&self.component_types())
    }
}
