//! Input model for one generation unit.

use crate::naming::{factory_name, normalize_type_name, registry_name, RegistryKind};

/// Default cap on entries per dispatch bucket.
pub const DEFAULT_MAX_ENTRIES_PER_BUCKET: usize = 1;

/// Crate the generated code calls into.
pub const DEFAULT_RUNTIME_CRATE: &str = "factory_registry";

/// A single type → generated helper mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Dot-normalized type name (`app.model.Order.Line`).
    pub type_name: String,
    /// Dot-separated name of the generated helper (`app.model.Order_Line__Factory`).
    pub factory_name: String,
}

impl Entry {
    pub fn new(type_name: impl Into<String>, factory_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            factory_name: factory_name.into(),
        }
    }

    /// Entry for a binary type name, with the helper named by convention.
    pub fn for_type(binary_type_name: &str, kind: RegistryKind) -> Self {
        Self {
            type_name: normalize_type_name(binary_type_name).into_owned(),
            factory_name: factory_name(binary_type_name, kind),
        }
    }
}

/// Everything needed to generate one registry.
///
/// Type names must be unique and non-empty, and `max_entries_per_bucket`
/// must be at least 1. These are checked when loading configuration, not
/// here; violating them yields ambiguous but deterministic output. At most
/// 2^31 buckets are addressable by the `i32` hash (see [`mask_for`](crate::mask_for)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDef {
    /// Namespace the registry is generated into.
    pub package: String,
    pub kind: RegistryKind,
    /// Packages whose registries are consulted on a miss, in order.
    /// Duplicates are kept.
    pub children: Vec<String>,
    pub max_entries_per_bucket: usize,
    /// Crate name the generated code refers to for runtime items.
    pub runtime_crate: String,
    entries: Vec<Entry>,
}

impl RegistryDef {
    pub fn new(package: impl Into<String>, kind: RegistryKind) -> Self {
        Self {
            package: package.into(),
            kind,
            children: Vec::new(),
            max_entries_per_bucket: DEFAULT_MAX_ENTRIES_PER_BUCKET,
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_entries_per_bucket(mut self, max: usize) -> Self {
        self.max_entries_per_bucket = max;
        self
    }

    pub fn with_runtime_crate(mut self, runtime_crate: impl Into<String>) -> Self {
        self.runtime_crate = runtime_crate.into();
        self
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Add entries for binary type names, naming helpers by convention.
    pub fn with_types<I, S>(mut self, binary_type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kind = self.kind;
        self.entries.extend(
            binary_type_names
                .into_iter()
                .map(|name| Entry::for_type(name.as_ref(), kind)),
        );
        self
    }

    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Entries in discovery order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Fully qualified name of the generated registry.
    pub fn name(&self) -> String {
        registry_name(&self.package, self.kind)
    }
}
