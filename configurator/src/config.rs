//! Configurator configuration module.
//!
//! Loads the settings of the `configurator` binary from environment
//! variables.
//!
//! # Environment Variables
//!
//! - `CONFIGURATOR_ONTOLOGY_PATH`: RDF file holding the ontology (required)
//! - `CONFIGURATOR_PRODUCT_ID`: Local name of the product to configure (default: `ClasseCBerlina`)
//! - `CONFIGURATOR_NAMESPACE`: Namespace of the ontology classes and properties
//!   (default: the car ontology namespace)
//! - `CONFIGURATOR_MAX_INFERENCE_PASSES`: Inference pass limit (default: `64`)
//!
//! # Invariants
//!
//! - `product_id` and `namespace` are never empty
//! - `max_inference_passes` is at least 1

use std::path::PathBuf;

use crate::constants::{CAR_NAMESPACE, DEFAULT_MAX_INFERENCE_PASSES, DEFAULT_PRODUCT_ID};

const ONTOLOGY_PATH_VAR: &str = "CONFIGURATOR_ONTOLOGY_PATH";
const PRODUCT_ID_VAR: &str = "CONFIGURATOR_PRODUCT_ID";
const NAMESPACE_VAR: &str = "CONFIGURATOR_NAMESPACE";
const MAX_INFERENCE_PASSES_VAR: &str = "CONFIGURATOR_MAX_INFERENCE_PASSES";

/// Configurator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguratorConfig {
    /// Path of the ontology file; its extension selects the RDF format.
    pub ontology_path: PathBuf,
    /// Identifier of the product instance, as a local name.
    pub product_id: String,
    /// Namespace prefix the product and category names resolve against.
    pub namespace: String,
    /// Passes the reasoner may run before giving up.
    pub max_inference_passes: usize,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is missing.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(name) => {
                write!(f, "missing required environment variable: {name}")
            }
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfiguratorConfig {
    /// Default product identifier.
    pub const DEFAULT_PRODUCT_ID: &'static str = DEFAULT_PRODUCT_ID;
    /// Default ontology namespace.
    pub const DEFAULT_NAMESPACE: &'static str = CAR_NAMESPACE;
    /// Default inference pass limit.
    pub const DEFAULT_MAX_INFERENCE_PASSES: usize = DEFAULT_MAX_INFERENCE_PASSES;

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `CONFIGURATOR_ONTOLOGY_PATH` is not set or is empty
    /// - `CONFIGURATOR_PRODUCT_ID` or `CONFIGURATOR_NAMESPACE` is set but empty
    /// - `CONFIGURATOR_MAX_INFERENCE_PASSES` is set but not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ConfiguratorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ontology_path = Self::load_ontology_path(&lookup)?;
        let product_id = Self::load_non_empty(&lookup, PRODUCT_ID_VAR, Self::DEFAULT_PRODUCT_ID)?;
        let namespace = Self::load_non_empty(&lookup, NAMESPACE_VAR, Self::DEFAULT_NAMESPACE)?;
        let max_inference_passes = Self::load_max_inference_passes(&lookup)?;

        Ok(Self {
            ontology_path,
            product_id,
            namespace,
            max_inference_passes,
        })
    }

    /// Load the ontology path.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set or is empty.
    fn load_ontology_path<F>(lookup: &F) -> Result<PathBuf, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path =
            lookup(ONTOLOGY_PATH_VAR).ok_or_else(|| ConfigError::MissingEnvVar(ONTOLOGY_PATH_VAR.to_string()))?;

        if path.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: ONTOLOGY_PATH_VAR.to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(PathBuf::from(path))
    }

    /// Load an optional string setting.
    ///
    /// Returns the default if not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is set but empty.
    fn load_non_empty<F>(lookup: &F, name: &str, default: &str) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(name) {
            Some(value) if value.is_empty() => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                message: "must not be empty".to_string(),
            }),
            Some(value) => Ok(value),
            None => Ok(default.to_string()),
        }
    }

    /// Load the inference pass limit.
    ///
    /// Returns the default if not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is set but not an integer of at least 1.
    fn load_max_inference_passes<F>(lookup: &F) -> Result<usize, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(value) = lookup(MAX_INFERENCE_PASSES_VAR) else {
            return Ok(Self::DEFAULT_MAX_INFERENCE_PASSES);
        };

        match value.parse::<usize>() {
            Ok(passes) if passes >= 1 => Ok(passes),
            _ => Err(ConfigError::InvalidValue {
                name: MAX_INFERENCE_PASSES_VAR.to_string(),
                message: format!("'{value}' is not a positive integer"),
            }),
        }
    }
}
