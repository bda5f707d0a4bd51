//! TOML configuration parser for registry.toml.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::def::{RegistryDef, DEFAULT_MAX_ENTRIES_PER_BUCKET, DEFAULT_RUNTIME_CRATE};
use crate::filter::PackageFilter;
use crate::naming::{normalize_type_name, RegistryKind};

/// Parsed and validated registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Namespace the registry is generated into
    pub package: String,
    pub kind: RegistryKind,
    pub max_entries_per_bucket: usize,
    /// Child registry packages, in delegation order
    pub children: Vec<String>,
    pub filter: PackageFilter,
    pub runtime_crate: String,
    /// Binary type names, in discovery order
    type_names: Vec<String>,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegistryConfig {
    package: String,
    /// "factory" (default) or "member_injector"
    kind: Option<RegistryKind>,
    max_entries_per_bucket: Option<u64>,
    #[serde(default)]
    children: Vec<String>,
    /// Defaults to the standard library crates
    excludes: Option<Vec<String>>,
    runtime_crate: Option<String>,
    #[serde(default)]
    types: RawTypes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTypes {
    /// Binary type names (`app.model.Order$Line`)
    #[serde(default)]
    names: Vec<String>,
}

impl RegistryConfig {
    /// Configuration with defaults for everything but the package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            kind: RegistryKind::default(),
            max_entries_per_bucket: DEFAULT_MAX_ENTRIES_PER_BUCKET,
            children: Vec::new(),
            filter: PackageFilter::default(),
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            type_names: Vec::new(),
        }
    }

    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawRegistryConfig = toml::from_str(content)?;

        let max_entries_per_bucket = match raw.max_entries_per_bucket {
            None => DEFAULT_MAX_ENTRIES_PER_BUCKET,
            Some(0) => {
                return Err(ConfigError::Validation(
                    "max_entries_per_bucket must be at least 1".into(),
                ));
            }
            Some(max) => usize::try_from(max).map_err(|_| {
                ConfigError::Validation(format!("max_entries_per_bucket {} is too large", max))
            })?,
        };

        let config = Self {
            package: raw.package,
            kind: raw.kind.unwrap_or_default(),
            max_entries_per_bucket,
            children: raw.children,
            filter: raw
                .excludes
                .map(PackageFilter::new)
                .unwrap_or_default(),
            runtime_crate: raw
                .runtime_crate
                .unwrap_or_else(|| DEFAULT_RUNTIME_CRATE.to_string()),
            type_names: raw.types.names,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_kind(mut self, kind: RegistryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Binary type names, in discovery order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.type_names.iter().map(String::as_str)
    }

    /// Check names and uniqueness.
    ///
    /// Run by [`RegistryConfig::from_str`]; programmatic callers building a
    /// config by hand should call it before [`RegistryConfig::to_def`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package.is_empty() {
            return Err(ConfigError::Validation("Empty package not allowed".into()));
        }
        if self.max_entries_per_bucket == 0 {
            return Err(ConfigError::Validation(
                "max_entries_per_bucket must be at least 1".into(),
            ));
        }
        validate_path("package", &self.package, false)?;
        validate_path("runtime_crate", &self.runtime_crate, false)?;
        self.filter.validate().map_err(ConfigError::Validation)?;
        for child in &self.children {
            validate_path("child", child, false)?;
        }

        let mut seen: HashSet<String> = HashSet::new();
        for name in &self.type_names {
            validate_path("type", name, true)?;
            let normalized = normalize_type_name(name).into_owned();
            if !seen.insert(normalized) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate type '{}'",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Apply the package filter and name every remaining type's helper.
    pub fn to_def(&self) -> RegistryDef {
        let kept = self
            .type_names
            .iter()
            .filter(|name| !self.filter.excludes(&normalize_type_name(name)));

        RegistryDef::new(self.package.clone(), self.kind)
            .with_children(self.children.iter().cloned())
            .with_max_entries_per_bucket(self.max_entries_per_bucket)
            .with_runtime_crate(self.runtime_crate.clone())
            .with_types(kept)
    }
}

/// Validate a dotted name: non-empty identifier segments, with `$` allowed
/// as a nested separator in type names.
fn validate_path(what: &str, path: &str, allow_nested: bool) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::Validation(format!("Empty {} not allowed", what)));
    }
    let separators: &[char] = if allow_nested { &['.', '$'] } else { &['.'] };
    for seg in path.split(separators) {
        if seg.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Invalid {} '{}': empty segment",
                what, path
            )));
        }
        // Valid identifier: starts with letter/underscore, contains alphanumeric/_
        let mut chars = seg.chars();
        if let Some(first) = chars.next()
            && !first.is_alphabetic()
            && first != '_'
        {
            return Err(ConfigError::Validation(format!(
                "Invalid {} '{}': segment '{}' must start with letter or underscore",
                what, path, seg
            )));
        }
        for c in chars {
            if !c.is_alphanumeric() && c != '_' {
                return Err(ConfigError::Validation(format!(
                    "Invalid {} '{}': segment '{}' contains invalid character '{}'",
                    what, path, seg, c
                )));
            }
        }
    }
    Ok(())
}

/// Errors during config parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}
