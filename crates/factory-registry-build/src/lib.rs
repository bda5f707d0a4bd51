//! Build-time registry generation for factory-registry.
//!
//! This crate provides tools for:
//! - Parsing `registry.toml` configuration files
//! - Partitioning type → factory entries into hash buckets
//! - Generating the Rust source of a registry that resolves a type name to a
//!   freshly constructed factory, delegating misses to child registries
//!
//! # Usage in build.rs
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     println!("cargo:rerun-if-changed=registry.toml");
//!     factory_registry_build::generate_in_out_dir("registry.toml", "factory_registry.rs")
//!         .expect("Failed to generate registry");
//! }
//! ```
//!
//! ```ignore
//! // src/lib.rs
//! extern crate self as app;
//!
//! mod registry {
//!     include!(concat!(env!("OUT_DIR"), "/factory_registry.rs"));
//! }
//! ```
//!
//! # Composition
//!
//! Every crate generates its own registry and names the crates it depends on
//! as `children`. A lookup that misses locally walks the children in order,
//! so adding a crate never requires regenerating the crates below it.
//!
//! # Determinism
//!
//! Output depends only on the configuration: no timestamps, no hash-map
//! iteration order. [`generate`] leaves the output file untouched when the
//! text is unchanged, so dependents are not rebuilt for nothing.

mod compose;
mod config;
mod def;
mod dispatch;
mod filter;
mod naming;
mod partition;

pub use compose::{compose, GENERATED_HEADER};
pub use config::{ConfigError, RegistryConfig};
pub use def::{Entry, RegistryDef, DEFAULT_MAX_ENTRIES_PER_BUCKET, DEFAULT_RUNTIME_CRATE};
pub use dispatch::{synthesize_accessors, synthesize_lookup, DispatchContext};
pub use filter::{PackageFilter, DEFAULT_EXCLUDES};
pub use naming::{
    factory_name, normalize_type_name, registry_name, rust_path, RegistryKind, NESTED_JOINER,
};
pub use partition::{bucket_count, mask_for, Partition, EMPTY_MASK};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main entry point for build.rs integration.
///
/// Reads `registry.toml`, generates the registry source and writes it to
/// `output_path`.
///
/// # Arguments
///
/// * `config_path` - Path to `registry.toml`
/// * `output_path` - Path to the generated Rust file
///
/// # Errors
///
/// Returns an error if:
/// - `registry.toml` cannot be read, parsed or validated
/// - The output file cannot be written
///
/// Returns whether the output file was (re)written.
pub fn generate(
    config_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<bool, GenerateError> {
    let config = RegistryConfig::from_file(config_path.as_ref())?;
    let code = generate_registry_code(config.to_def());
    write_if_changed(output_path.as_ref(), &code)
}

/// Generate into `$OUT_DIR/<file_name>`.
///
/// Returns the path of the generated file, for `include!`.
pub fn generate_in_out_dir(
    config_path: impl AsRef<Path>,
    file_name: &str,
) -> Result<PathBuf, GenerateError> {
    let out_dir = std::env::var_os("OUT_DIR").ok_or(GenerateError::MissingOutDir)?;
    let output_path = PathBuf::from(out_dir).join(file_name);
    generate(config_path, &output_path)?;
    Ok(output_path)
}

/// Generate registry source from an already-built definition.
pub fn generate_registry_code(def: RegistryDef) -> String {
    compose(def)
}

/// Write `code` to `path` unless the file already holds exactly that text.
///
/// Returns `true` if the file was written.
pub fn write_if_changed(path: &Path, code: &str) -> Result<bool, GenerateError> {
    if let Ok(existing) = std::fs::read_to_string(path)
        && existing == code
    {
        tracing::info!(path = %path.display(), "registry unchanged");
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, code).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = code.len(), "registry written");
    Ok(true)
}

/// Errors that can occur during generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Failed to load registry.toml
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Failed to write the generated file
    #[error("IO error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// `generate_in_out_dir` called outside a build script
    #[error("OUT_DIR is not set; generate_in_out_dir must run from build.rs")]
    MissingOutDir,
}
