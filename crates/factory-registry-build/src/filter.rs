//! Package exclusion filter applied before partitioning.

use crate::naming::normalize_type_name;

/// Excluded by default: types from the standard library crates.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["std.*", "core.*", "alloc.*"];

/// Drops type names matching any exclusion pattern.
///
/// Patterns are normalized like type names (`app.Outer$*` is `app.Outer.*`)
/// and matched against normalized type names:
/// - `prefix.*` matches every type under `prefix`, at any depth
/// - anything else matches exactly one type name
///
/// `*` anywhere but in a trailing `.*` is not a wildcard; [`PackageFilter::validate`]
/// rejects such patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFilter {
    patterns: Vec<String>,
}

impl Default for PackageFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES)
    }
}

impl PackageFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|pattern| {
                    let pattern: String = pattern.into();
                    normalize_type_name(&pattern).into_owned()
                })
                .collect(),
        }
    }

    /// Filter that keeps everything.
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True if `type_name` matches an exclusion pattern.
    pub fn excludes(&self, type_name: &str) -> bool {
        self.patterns.iter().any(|pattern| match pattern.strip_suffix(".*") {
            Some(package) => type_name
                .strip_prefix(package)
                .is_some_and(|rest| rest.starts_with('.')),
            None => type_name == pattern,
        })
    }

    /// First pattern that is neither an exact name nor a `prefix.*` wildcard.
    pub fn validate(&self) -> Result<(), String> {
        for pattern in &self.patterns {
            let name = pattern.strip_suffix(".*").unwrap_or(pattern);
            if name.is_empty() || name.contains('*') || name.split('.').any(str::is_empty) {
                return Err(format!(
                    "Invalid exclude '{}': expected a type name or 'prefix.*'",
                    pattern
                ));
            }
        }
        Ok(())
    }
}
